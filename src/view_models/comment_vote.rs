//! Comment Like / Unlike Model

use serde::Deserialize;

use crate::models::VoteReply;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Like,
    Unlike,
}

impl Vote {
    pub fn as_str(self) -> &'static str {
        match self {
            Vote::Like => "like",
            Vote::Unlike => "unlike",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VoteState {
    selected: Option<Vote>,
    likes: u32,
    unlikes: u32,
}

impl VoteState {
    pub fn new(selected: Option<Vote>, likes: u32, unlikes: u32) -> Self {
        Self { selected, likes, unlikes }
    }

    /// Selection after clicking `vote`: the active thumb clears itself,
    /// the other one takes over
    pub fn toggled(&self, vote: Vote) -> Option<Vote> {
        if self.selected == Some(vote) {
            None
        } else {
            Some(vote)
        }
    }

    /// Apply a confirmed click; counts are the server's
    pub fn confirm(&mut self, selected: Option<Vote>, reply: &VoteReply) {
        self.selected = selected;
        self.likes = reply.new_count_likes;
        self.unlikes = reply.new_count_unlikes;
    }

    pub fn is_filled(&self, vote: Vote) -> bool {
        self.selected == Some(vote)
    }

    /// "(n)" count label
    pub fn count_label(&self, vote: Vote) -> String {
        match vote {
            Vote::Like => format!("({})", self.likes),
            Vote::Unlike => format!("({})", self.unlikes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(likes: u32, unlikes: u32) -> VoteReply {
        VoteReply { new_count_likes: likes, new_count_unlikes: unlikes }
    }

    #[test]
    fn test_like_then_unlike_switches() {
        let mut state = VoteState::new(None, 2, 1);

        let next = state.toggled(Vote::Like);
        state.confirm(next, &reply(3, 1));
        assert!(state.is_filled(Vote::Like));
        assert_eq!(state.count_label(Vote::Like), "(3)");

        let next = state.toggled(Vote::Unlike);
        state.confirm(next, &reply(2, 2));
        assert!(state.is_filled(Vote::Unlike));
        assert!(!state.is_filled(Vote::Like));
        assert_eq!(state.count_label(Vote::Unlike), "(2)");
    }

    #[test]
    fn test_clicking_active_thumb_clears_it() {
        let mut state = VoteState::new(Some(Vote::Like), 5, 0);
        let next = state.toggled(Vote::Like);
        assert_eq!(next, None);
        state.confirm(next, &reply(4, 0));
        assert!(!state.is_filled(Vote::Like));
        assert!(!state.is_filled(Vote::Unlike));
    }
}
