//! サーバー再起動/シャットダウンのダイアログ

use crate::api::control::send_control;
use crate::dom;
use leptos::prelude::*;
use leptos::task::spawn_local;
use picture_streamer_common::control::NETWORK_ERROR_MESSAGE;
use picture_streamer_common::ControlCommand;
use tracing::warn;

/// 送信結果の表示
#[derive(Clone, PartialEq)]
struct Outcome {
    message: &'static str,
    is_error: bool,
}

#[component]
pub fn ShutdownDialog(set_open: WriteSignal<bool>) -> impl IntoView {
    let (outcome, set_outcome) = signal(None::<Outcome>);
    let (sending, set_sending) = signal(false);
    let (cancelable, set_cancelable) = signal(true);

    let send = move |command: ControlCommand| {
        set_sending.set(true);
        spawn_local(async move {
            let result = match send_control(command).await {
                Ok(response) => {
                    if let Some(delay) = response.dismiss_after() {
                        set_cancelable.set(false);
                        dom::after(delay, move || set_open.set(false));
                    }
                    Outcome {
                        message: response.message(),
                        is_error: response.is_error(),
                    }
                }
                Err(e) => {
                    warn!(error = %e, ?command, "control request failed");
                    Outcome {
                        message: NETWORK_ERROR_MESSAGE,
                        is_error: true,
                    }
                }
            };
            set_outcome.set(Some(result));
        });
    };

    view! {
        <div id="GlobalOverlay" class="Overlay">
            <div id="ShutdownFormFrame" class="OverlayForm">
                <div id="OverlayFormTitle" class="OverlayFormTitle">"Shutdown server"</div>
                {move || {
                    outcome
                        .get()
                        .map(|outcome| {
                            let class = if outcome.is_error {
                                "OverlayFormError"
                            } else {
                                "OverlayMessageDiv"
                            };
                            view! { <div class=class>{outcome.message}</div> }
                        })
                }}
                <Show when=move || outcome.get().is_none()>
                    <form id="ShutdownForm" class="OverlayForm" on:submit=|ev| ev.prevent_default()>
                        <button
                            id="RebootButton"
                            class="OverlayForm"
                            type="button"
                            disabled=move || sending.get()
                            on:click=move |_| send(ControlCommand::Reboot)
                        >
                            "Reboot"
                        </button>
                        <button
                            id="ShutdownButton"
                            class="OverlayForm"
                            type="button"
                            disabled=move || sending.get()
                            on:click=move |_| send(ControlCommand::Shutdown)
                        >
                            "Shutdown"
                        </button>
                    </form>
                </Show>
                <Show when=move || cancelable.get()>
                    <button
                        id="ShutdownCancelButton"
                        class="OverlayForm"
                        on:click=move |_| set_open.set(false)
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </div>
    }
}
