use yew::prelude::*;

use crate::config::ScrollLockSettings;
use crate::scroll_lock::{use_scroll_lock, Direction, Progress, UseScrollLockOptions};

#[derive(Properties, PartialEq)]
pub struct BeforeAfterProps {
    pub title: String,
    pub before: Html,
    pub after: Html,
    #[prop_or_default]
    pub settings: ScrollLockSettings,
}

/// Pins the page while scrolling wipes the "after" panel over the "before" one.
#[function_component(BeforeAfterReveal)]
pub fn before_after_reveal(props: &BeforeAfterProps) -> Html {
    let section_ref = use_node_ref();
    let progress = use_mut_ref(|| Progress::new(props.settings.sensitivity));
    let value = use_state_eq(|| 0.0_f64);

    progress.borrow_mut().set_sensitivity(props.settings.sensitivity);

    let on_progress = {
        let progress = progress.clone();
        let value = value.setter();
        Callback::from(move |(delta, _direction): (f64, Direction)| {
            let next = progress.borrow_mut().apply(delta);
            value.set(next);
        })
    };

    // `value` mirrors this so progress changes re-render
    let current = *progress.borrow();

    let lock = use_scroll_lock(
        section_ref.clone(),
        UseScrollLockOptions {
            lock_threshold: props.settings.lock_threshold,
            is_complete: current.is_complete(),
            can_reverse_exit: props.settings.can_reverse_exit,
            at_start: current.is_at_start(),
            on_progress,
        },
    );

    let percent = current.value() * 100.0;
    let after_style = format!("clip-path: inset(0 {:.2}% 0 0);", 100.0 - percent);
    let divider_style = format!("left: {:.2}%;", percent);
    let bar_style = format!("width: {:.2}%;", percent);

    let hint = if current.is_complete() {
        "Keep scrolling"
    } else if lock.is_locked {
        "Scroll to reveal"
    } else {
        ""
    };

    html! {
        <section ref={section_ref} class={classes!("before-after", lock.is_locked.then(|| "locked"))}>
            <style>
                {r#"
                    .before-after {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        padding: 4rem 1.5rem;
                        background: #0d1117;
                        color: #f4f1ea;
                    }
                    .before-after-title {
                        font-size: 2.2rem;
                        margin-bottom: 2rem;
                        text-align: center;
                    }
                    .before-after-stage {
                        position: relative;
                        width: min(960px, 100%);
                        aspect-ratio: 16 / 9;
                        border-radius: 24px;
                        overflow: hidden;
                        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.4);
                    }
                    .before-panel, .after-panel {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 3rem;
                    }
                    .before-panel {
                        background: linear-gradient(135deg, #3a1f1f, #1c1c1c);
                    }
                    .after-panel {
                        background: linear-gradient(135deg, #1f3a2c, #12261d);
                        will-change: clip-path;
                    }
                    .reveal-divider {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        background: #f4f1ea;
                        opacity: 0.7;
                    }
                    .reveal-progress {
                        width: min(960px, 100%);
                        height: 4px;
                        margin-top: 1.5rem;
                        background: rgba(244, 241, 234, 0.15);
                        border-radius: 2px;
                    }
                    .reveal-progress-bar {
                        height: 100%;
                        background: #c8a45c;
                        border-radius: 2px;
                    }
                    .reveal-hint {
                        margin-top: 1rem;
                        min-height: 1.5em;
                        opacity: 0.7;
                        letter-spacing: 0.05em;
                    }
                    @media (max-width: 768px) {
                        .before-after-title {
                            font-size: 1.6rem;
                        }
                        .before-panel, .after-panel {
                            padding: 1.5rem;
                        }
                    }
                "#}
            </style>
            <h2 class="before-after-title">{ props.title.clone() }</h2>
            <div class="before-after-stage">
                <div class="before-panel">{ props.before.clone() }</div>
                <div class="after-panel" style={after_style}>{ props.after.clone() }</div>
                <div class="reveal-divider" style={divider_style}></div>
            </div>
            <div class="reveal-progress">
                <div class="reveal-progress-bar" style={bar_style}></div>
            </div>
            <p class="reveal-hint">{ hint }</p>
        </section>
    }
}
