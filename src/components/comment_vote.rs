//! Comment Like / Unlike
//!
//! Thumb buttons under a product comment. Anonymous visitors get a dialog
//! pointing at the login page instead of a redirect.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::api;
use crate::context::use_page;
use crate::error::RequestError;
use crate::models::VoteReply;
use crate::request_seq::InFlight;
use crate::view_models::{Vote, VoteState};

const FILLED: &str = "'FILL' 1";
const OUTLINED: &str = "'FILL' 0";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommentVoteOptions {
    pub url: String,
    pub comment_id: u32,
    pub likes: u32,
    pub unlikes: u32,
    /// The visitor's current vote, if any
    pub vote: Option<Vote>,
}

#[component]
pub fn CommentVote(options: CommentVoteOptions) -> impl IntoView {
    let page = use_page();
    let in_flight = InFlight::new();
    let state = RwSignal::new(VoteState::new(options.vote, options.likes, options.unlikes));
    let url = StoredValue::new(options.url);
    let comment_id = options.comment_id;
    let (login_url, set_login_url) = signal(None::<String>);

    let vote = move |clicked: Vote| {
        let selected = state.with_untracked(|s| s.toggled(clicked));
        let ticket = in_flight.begin();
        let url = url.get_value();
        log::debug!("[COMMENT] {} on comment {}", clicked.as_str(), comment_id);

        spawn_local(async move {
            let result: Result<VoteReply, RequestError> = async {
                let csrf = page.csrf()?;
                api::vote_comment(&url, &csrf, comment_id, clicked).await
            }
            .await;

            match result {
                Ok(reply) if in_flight.is_current(ticket) => {
                    state.update(|s| s.confirm(selected, &reply));
                }
                Ok(_) => log::debug!("[COMMENT] Discarding stale reply for {}", comment_id),
                Err(RequestError::Unauthorized { login_url }) => {
                    log::info!("[COMMENT] Anonymous vote on {}", comment_id);
                    set_login_url.set(Some(login_url));
                }
                Err(e) => page.report("COMMENT", e),
            }
        });
    };

    let thumb = move |kind: Vote, icon: &'static str| {
        view! {
            <button class=format!("comment-{}", kind.as_str()) on:click=move |_| vote(kind)>
                <span
                    class="material-symbols-outlined"
                    style:font-variation-settings={move || if state.with(|s| s.is_filled(kind)) { FILLED } else { OUTLINED }}
                >
                    {icon}
                </span>
                <span class="vote-count">{move || state.with(|s| s.count_label(kind))}</span>
            </button>
        }
    };

    let please = page.label(|l| &l.please);
    let login_label = page.label(|l| &l.login);
    let login_hint = page.label(|l| &l.login_to_rate);
    let unauthorized = page.label(|l| &l.unauthorized);

    view! {
        <div class="comment-votes">
            {thumb(Vote::Like, "thumb_up")}
            {thumb(Vote::Unlike, "thumb_down")}
            {move || login_url.get().map(|url| view! {
                <div class="modal-login" role="dialog">
                    <div class="modal-content">
                        <button class="modal-close" on:click=move |_| set_login_url.set(None)>"×"</button>
                        <h3>{unauthorized.clone()}</h3>
                        <p>
                            {please.clone()}" "<a href=url>{login_label.clone()}</a>" "{login_hint.clone()}
                        </p>
                    </div>
                </div>
            })}
        </div>
    }
}
