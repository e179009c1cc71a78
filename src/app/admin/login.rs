use leptos::{html::Input, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::AdminSession;
use crate::app::api::login_server;
use crate::auth::LoginLockout;

#[component]
pub fn AdminLogin() -> impl IntoView {
    let session = expect_context::<AdminSession>();
    let input_ref = NodeRef::<Input>::new();
    let (lockout, set_lockout) = signal(LoginLockout::default());
    let (message, set_message) = signal(None::<String>);

    // the lockout counter survives reloads; clearing local storage to dodge
    // it is fine, this is a speed bump against idle guessing, not a vault
    #[cfg(feature = "hydrate")]
    let (stored_lockout, set_stored_lockout, _) =
        use_local_storage::<LoginLockout, JsonSerdeWasmCodec>("admin_lockout");
    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            set_lockout(stored_lockout.get_untracked());
        },
        true,
    );

    let persist = move |lockout: LoginLockout| {
        #[cfg(feature = "hydrate")]
        set_stored_lockout.set(lockout.clone());
        set_lockout(lockout);
    };

    let login = Action::new(|password: &String| {
        let password = password.clone();
        async move { login_server(password).await }
    });

    Effect::new(move |_| {
        let Some(result) = login.value().get() else {
            return;
        };
        match result {
            Ok(true) => {
                let mut cleared = lockout.get_untracked();
                cleared.reset();
                persist(cleared);
                set_message(None);
                session.0.set(true);
            }
            Ok(false) => {
                let mut failed = lockout.get_untracked();
                failed.record_failure();
                let text = if failed.is_locked() {
                    "Too many failed attempts. The form is locked.".to_string()
                } else {
                    format!(
                        "Wrong password. {} attempt(s) remaining.",
                        failed.attempts_remaining()
                    )
                };
                persist(failed);
                set_message(Some(text));
            }
            Err(_) => {
                set_message(Some("Something went wrong. Try again.".to_string()));
            }
        }
    });

    view! {
        <div class="w-full max-w-md mx-auto section-content">
            <form
                class="bg-brightBlack/20 p-6 rounded-md border border-muted/30 flex flex-col gap-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    if lockout.get_untracked().is_locked() {
                        return;
                    }
                    let el = if let Some(el) = input_ref.get_untracked() {
                        el
                    } else {
                        return;
                    };
                    login.dispatch(el.value());
                    el.set_value("");
                }
            >
                <label for="admin_password" class="font-medium text-cyan">
                    "Admin password"
                </label>
                <input
                    id="admin_password"
                    type="password"
                    node_ref=input_ref
                    class="w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground"
                    prop:disabled=move || lockout.get().is_locked()
                />
                <button
                    type="submit"
                    class="px-4 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 transition-all duration-200 disabled:opacity-40"
                    prop:disabled=move || {
                        lockout.get().is_locked() || login.pending().get()
                    }
                >
                    "Sign in"
                </button>
                {move || {
                    message
                        .get()
                        .map(|text| {
                            view! { <div class="text-sm text-red">{text}</div> }
                        })
                }}
            </form>
        </div>
    }
}
