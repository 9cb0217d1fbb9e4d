use dioxus::prelude::*;
use store::{
    fetch_users, Confirmation, DeleteTarget, Interest, InterestEditor, SearchMode, SearchRequest,
    SearchState, User, UserDirectory,
};

use crate::directory::use_directory;
use crate::notifications::{notify, use_notifications, Level};
use crate::{
    AddInterestDialog, AddUserDialog, AlertDialog, ConfirmDialog, EditInterestDialog, Header,
    NotificationPanel, SearchBar, UserCard,
};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// The search page: query bar, result cards and every dialog.
///
/// Owns the search state, the interest editor and the pending delete
/// confirmation. Requests go through the client from `DirectoryProvider`;
/// failures end up as notifications.
#[component]
pub fn SearchView() -> Element {
    let mut search = use_signal(SearchState::new);
    let mut editor = use_signal(InterestEditor::default);
    let mut confirmation = use_signal(Confirmation::<DeleteTarget>::new);
    let mut show_add_user = use_signal(|| false);
    let mut show_add_interest = use_signal(|| false);
    let mut notifications = use_notifications();
    let directory = use_directory();

    // Issue a request; a response is only applied if no newer one was issued
    let run_search = use_callback({
        let directory = directory.clone();
        move |request: SearchRequest| {
            let directory = directory.clone();
            let ticket = search.write().begin(request.clone());
            spawn(async move {
                let response = fetch_users(&directory, &request).await;
                let applied = search.write().finish(ticket, response);
                if let Err(e) = applied {
                    notify(&mut notifications, Level::Error, &request.failure_message(&e));
                }
            });
        }
    });

    let refresh = move || {
        let request = search.peek().refresh_request();
        run_search.call(request);
    };

    // Load everyone on mount
    use_effect(move || run_search.call(SearchRequest::Everyone));

    let handle_search = move |_: ()| {
        let request = search.peek().request();
        run_search.call(request);
    };

    let open_editor = move |(user, interest): (User, Interest)| {
        let opened = editor.write().open(&user, &interest);
        if let Err(e) = opened {
            notify(&mut notifications, Level::Warning, &e.to_string());
        }
    };

    let save_interest = use_callback({
        let directory = directory.clone();
        move |_: ()| {
            let begun = editor.write().begin_save();
            let update = match begun {
                Ok(Some(update)) => update,
                Ok(None) => return,
                Err(e) => {
                    notify(&mut notifications, Level::Warning, &e.to_string());
                    return;
                }
            };
            let directory = directory.clone();
            spawn(async move {
                let result = directory
                    .update_interest(update.user_id, update.interest_id, &update.interest_type)
                    .await;
                let finished = editor.write().finish_save(result);
                match finished {
                    Ok(true) => {
                        notify(
                            &mut notifications,
                            Level::Success,
                            &format!("Interest renamed to \"{}\"", update.interest_type),
                        );
                        refresh();
                    }
                    Ok(false) => {}
                    Err(e) => notify(
                        &mut notifications,
                        Level::Error,
                        &format!("Failed to save interest: {e}"),
                    ),
                }
            });
        }
    });

    let ask_delete_interest = move |(user, interest): (User, Interest)| {
        confirmation.write().request(DeleteTarget::Interest {
            user_id: user.id,
            interest_name: interest.interest_type,
        });
    };

    let ask_delete_user = move |user: User| {
        confirmation.write().request(DeleteTarget::User {
            user_id: user.id,
            name: user.name,
        });
    };

    let confirm_delete = use_callback({
        let directory = directory.clone();
        move |_: ()| {
            let Some(target) = confirmation.write().confirm() else {
                return;
            };
            let directory = directory.clone();
            spawn(async move {
                let result = target.execute(&directory).await;
                let applied = search.write().apply_delete(&target, result);
                match applied {
                    Ok(needs_refresh) => {
                        notify(&mut notifications, Level::Success, &target.done_message());
                        if needs_refresh {
                            refresh();
                        }
                    }
                    Err(e) => notify(&mut notifications, Level::Error, &target.failure_message(&e)),
                }
            });
        }
    });

    let state = search();
    let edit_session = editor().session().cloned();
    let saving = editor().is_saving();
    let pending = confirmation().pending().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "page",

            Header {
                on_add_user: move |_| show_add_user.set(true),
                on_add_interest: move |_| show_add_interest.set(true),
            }

            h1 { "Search by interests" }

            SearchBar {
                query: state.query.clone(),
                mode: state.mode,
                on_query: move |query: String| search.write().set_query(query),
                on_mode: move |mode: SearchMode| search.write().set_mode(mode),
                on_search: handle_search,
            }

            if state.loading {
                p { class: "loading", "Loading..." }
            } else if state.results.is_empty() {
                p { class: "empty", "No users found" }
            }

            div {
                class: "user-grid",
                for user in state.results.iter() {
                    UserCard {
                        key: "{user.id}",
                        user: user.clone(),
                        on_edit_interest: open_editor,
                        on_delete_interest: ask_delete_interest,
                        on_delete_user: ask_delete_user,
                    }
                }
            }
        }

        if let Some(session) = edit_session {
            EditInterestDialog {
                session: session.clone(),
                saving: saving,
                on_input: move |text: String| editor.write().set_text(text),
                on_save: save_interest,
                on_cancel: move |_| editor.write().cancel(),
            }
        }

        if let Some(target) = pending {
            ConfirmDialog {
                prompt: target.prompt(),
                confirm_label: target.confirm_label().to_string(),
                on_confirm: confirm_delete,
                on_decline: move |_| confirmation.write().decline(),
            }
        }

        if show_add_user() {
            AddUserDialog {
                on_created: move |user: User| {
                    let name = user.name.clone();
                    search.write().prepend(user);
                    notify(&mut notifications, Level::Success, &format!("Added user {name}"));
                },
                on_close: move |_| show_add_user.set(false),
            }
        }

        if show_add_interest() {
            AddInterestDialog {
                users: state.results.clone(),
                on_created: move |_| {
                    notify(&mut notifications, Level::Success, "Interest added");
                    refresh();
                },
                on_close: move |_| show_add_interest.set(false),
            }
        }

        NotificationPanel {}
        AlertDialog {}
    }
}
