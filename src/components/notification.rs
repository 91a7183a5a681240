use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

/// Delay before a freshly attached toast switches from `Entering` to
/// `Visible`, giving the CSS transition something to animate from.
const ENTER_TICK_MS: u32 = 100;
const AUTO_DISMISS_MS: u32 = 5_000;
const EXIT_TRANSITION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    fn class_suffix(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#4CAF50",
            NotificationKind::Error => "#f44336",
            NotificationKind::Info => "#2196F3",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub phase: TransitionPhase,
}

/// Opaque reference to a live notification, usable for explicit
/// dismissal by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationHandle {
    id: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NotificationAction {
    Spawned(Notification),
    Shown(u64),
    DismissRequested(u64),
    Removed(u64),
}

/// The live set of on-screen toasts. Every change goes through
/// [`Reducible::reduce`], and dismissal/removal of an id that is gone or
/// already on its way out is a no-op, so racing timers cannot double-fire.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NotificationsState {
    pub toasts: Vec<Notification>,
}

impl Reducible for NotificationsState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: NotificationAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            NotificationAction::Spawned(notification) => {
                toasts.push(notification);
            }
            NotificationAction::Shown(id) => {
                if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                    if toast.phase == TransitionPhase::Entering {
                        toast.phase = TransitionPhase::Visible;
                    }
                }
            }
            NotificationAction::DismissRequested(id) => {
                if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                    toast.phase = TransitionPhase::Leaving;
                }
            }
            NotificationAction::Removed(id) => {
                toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(NotificationsState { toasts })
    }
}

/// Cloneable handle handed out through context; anything on the page can
/// surface a transient message with it.
#[derive(Clone)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<NotificationsState>,
    next_id: Rc<Cell<u64>>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Notifier {
    pub fn notify(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let message = message.into();
        info!("notification {}: {:?}", id, kind);
        self.dispatcher.dispatch(NotificationAction::Spawned(Notification {
            id,
            message,
            kind,
            created_at: Utc::now(),
            phase: TransitionPhase::Entering,
        }));
        NotificationHandle { id }
    }

    pub fn dismiss(&self, handle: &NotificationHandle) {
        self.dispatcher
            .dispatch(NotificationAction::DismissRequested(handle.id));
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("NotificationProvider is not mounted")
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let state = use_reducer(NotificationsState::default);
    let next_id = use_memo(|_| Cell::new(0_u64), ());
    let notifier = Notifier {
        dispatcher: state.dispatcher(),
        next_id,
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { props.children.clone() }
            <div class="notification-stack">
                <style>
                {r#"
                    .notification-stack {
                        position: fixed;
                        top: 20px;
                        right: 20px;
                        z-index: 10000;
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                        pointer-events: none;
                    }
                    .notification {
                        color: white;
                        padding: 16px 20px;
                        border-radius: 8px;
                        box-shadow: 0 4px 12px rgba(0,0,0,0.15);
                        transition: transform 0.3s ease;
                        max-width: 400px;
                        word-wrap: break-word;
                        pointer-events: auto;
                    }
                    .notification-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 12px;
                    }
                    .notification-message {
                        white-space: pre-line;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 20px;
                        cursor: pointer;
                        padding: 0;
                        width: 24px;
                        height: 24px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .notification-close:hover {
                        opacity: 0.8;
                    }
                "#}
                </style>
                { for state.toasts.iter().map(|toast| html! {
                    <Toast
                        key={toast.id.to_string()}
                        notification={toast.clone()}
                        dispatcher={state.dispatcher()}
                    />
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notification: Notification,
    dispatcher: UseReducerDispatcher<NotificationsState>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let id = props.notification.id;
    let notifier = use_notifier();

    // Two independent fire-and-forget timers per toast: the slide-in tick
    // and the auto-dismiss. Neither is cancelled; the reducer ignores
    // whichever loses a race with manual dismissal.
    {
        let dispatcher = props.dispatcher.clone();
        let notifier = notifier.clone();
        use_effect_with_deps(
            move |_| {
                Timeout::new(ENTER_TICK_MS, move || {
                    dispatcher.dispatch(NotificationAction::Shown(id));
                })
                .forget();
                // Auto-dismiss goes through the same path as the close
                // button.
                Timeout::new(AUTO_DISMISS_MS, move || {
                    notifier.dismiss(&NotificationHandle { id });
                })
                .forget();
                || ()
            },
            id,
        );
    }

    {
        let dispatcher = props.dispatcher.clone();
        let leaving = props.notification.phase == TransitionPhase::Leaving;
        use_effect_with_deps(
            move |leaving: &bool| {
                if *leaving {
                    Timeout::new(EXIT_TRANSITION_MS, move || {
                        dispatcher.dispatch(NotificationAction::Removed(id));
                    })
                    .forget();
                }
                || ()
            },
            leaving,
        );
    }

    let on_close = {
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            notifier.dismiss(&NotificationHandle { id });
        })
    };

    let transform = match props.notification.phase {
        TransitionPhase::Visible => "translateX(0)",
        TransitionPhase::Entering | TransitionPhase::Leaving => "translateX(400px)",
    };
    let style = format!(
        "background: {}; transform: {};",
        props.notification.kind.background(),
        transform
    );
    let class = format!(
        "notification notification-{}",
        props.notification.kind.class_suffix()
    );

    let shown_at = props
        .notification
        .created_at
        .format("%H:%M:%S UTC")
        .to_string();

    html! {
        <div class={class} style={style} title={shown_at}>
            <div class="notification-content">
                <span class="notification-message">{ &props.notification.message }</span>
                <button class="notification-close" onclick={on_close}>{"×"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: u64) -> Notification {
        Notification {
            id,
            message: format!("message {}", id),
            kind: NotificationKind::Info,
            created_at: Utc::now(),
            phase: TransitionPhase::Entering,
        }
    }

    fn reduce(state: NotificationsState, action: NotificationAction) -> NotificationsState {
        Rc::new(state).reduce(action).as_ref().clone()
    }

    #[test]
    fn each_notify_tracks_independently() {
        let mut state = NotificationsState::default();
        for id in 0..3 {
            state = reduce(state, NotificationAction::Spawned(note(id)));
        }
        assert_eq!(state.toasts.len(), 3);

        state = reduce(state, NotificationAction::Shown(1));
        assert_eq!(state.toasts[0].phase, TransitionPhase::Entering);
        assert_eq!(state.toasts[1].phase, TransitionPhase::Visible);
        assert_eq!(state.toasts[2].phase, TransitionPhase::Entering);
    }

    #[test]
    fn dismissing_one_leaves_the_others_alone() {
        let mut state = NotificationsState::default();
        for id in 0..3 {
            state = reduce(state, NotificationAction::Spawned(note(id)));
            state = reduce(state, NotificationAction::Shown(id));
        }

        state = reduce(state, NotificationAction::DismissRequested(1));
        state = reduce(state, NotificationAction::Removed(1));

        let ids: Vec<u64> = state.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert!(state
            .toasts
            .iter()
            .all(|t| t.phase == TransitionPhase::Visible));
    }

    #[test]
    fn dismissal_is_idempotent_after_removal() {
        let mut state = NotificationsState::default();
        state = reduce(state, NotificationAction::Spawned(note(7)));
        state = reduce(state, NotificationAction::DismissRequested(7));
        state = reduce(state, NotificationAction::Removed(7));

        // The losing timer fires later; nothing to do.
        let after = reduce(state.clone(), NotificationAction::DismissRequested(7));
        assert_eq!(after, state);
        let after = reduce(state.clone(), NotificationAction::Removed(7));
        assert_eq!(after, state);
    }

    #[test]
    fn show_after_dismissal_does_not_resurrect() {
        let mut state = NotificationsState::default();
        state = reduce(state, NotificationAction::Spawned(note(1)));
        state = reduce(state, NotificationAction::DismissRequested(1));

        // The entering tick lost the race with a manual dismissal.
        state = reduce(state, NotificationAction::Shown(1));
        assert_eq!(state.toasts[0].phase, TransitionPhase::Leaving);
    }

    #[test]
    fn repeated_dismiss_requests_collapse() {
        let mut state = NotificationsState::default();
        state = reduce(state, NotificationAction::Spawned(note(1)));
        state = reduce(state, NotificationAction::Shown(1));
        state = reduce(state, NotificationAction::DismissRequested(1));
        let again = reduce(state.clone(), NotificationAction::DismissRequested(1));
        assert_eq!(again, state);
    }
}
