//! User List Component
//!
//! The list view owns the in-memory user collection and performs all four
//! CRUD operations against the remote API:
//! - User table with view/edit/delete actions per row
//! - Create/Edit user modal
//! - Delete confirmation modal
//!
//! The collection is fetched once on mount and never re-fetched; every
//! later change is applied by local patching keyed on id, driven by the
//! server's response payloads.

use leptos::*;
use userdir_shared::{remove_by_id, replace_by_id, User, UserDraft};

use crate::client::UsersClient;
use crate::components::common::{EditIcon, PlusIcon, TrashIcon, UsersIcon};

use super::{DeleteConfirmModal, UserFormModal};

// One user-facing message per operation; the most recent one wins and a
// subsequent successful operation clears it.
const FETCH_ERROR: &str = "Failed to fetch users. Please try again.";
const CREATE_ERROR: &str = "Failed to create user. Please try again.";
const UPDATE_ERROR: &str = "Failed to update user. Please try again.";
const DELETE_ERROR: &str = "Failed to delete user. Please try again.";

/// Record a failed operation in the shared error slot, replacing any
/// previous message. The collection is never touched on failure.
fn record_failure(slot: &mut Option<String>, message: &str) {
    *slot = Some(message.to_string());
}

/// Clear the shared error slot after any successful operation.
fn record_success(slot: &mut Option<String>) {
    *slot = None;
}

/// Main user list component
#[component]
pub fn UserList() -> impl IntoView {
    let (users, set_users) = create_signal(Vec::<User>::new());
    let (error, set_error) = create_signal(Option::<String>::None);

    // Modal state
    let (show_form_modal, set_show_form_modal) = create_signal(false);
    let (editing_user, set_editing_user) = create_signal(Option::<User>::None);
    let (deleting_user, set_deleting_user) = create_signal(Option::<User>::None);

    // In-flight request flags for the modal buttons
    let (saving, set_saving) = create_signal(false);
    let (deleting, set_deleting) = create_signal(false);

    // Initial load, once on mount. On failure the collection stays empty;
    // there is no retry and no later re-fetch.
    create_effect(move |_| {
        spawn_local(async move {
            let client = UsersClient::default();
            match client.list().await {
                Ok(data) => {
                    set_users.set(data);
                    set_error.update(record_success);
                }
                Err(e) => {
                    tracing::error!("Error fetching users: {e}");
                    set_error.update(|slot| record_failure(slot, FETCH_ERROR));
                }
            }
        });
    });

    // Submit handler for both create and edit; which one ran is decided by
    // whether an editing identity is set. On failure the modal stays open.
    let on_submit = move |draft: UserDraft| {
        let editing = editing_user.get_untracked().map(|u| u.id);
        spawn_local(async move {
            set_saving.set(true);
            let client = UsersClient::default();
            match editing {
                Some(id) => match client.update(id, &draft).await {
                    Ok(updated) => {
                        set_users.update(|users| {
                            replace_by_id(users, updated);
                        });
                        set_show_form_modal.set(false);
                        set_editing_user.set(None);
                        set_error.update(record_success);
                    }
                    Err(e) => {
                        tracing::error!("Error updating user: {e}");
                        set_error.update(|slot| record_failure(slot, UPDATE_ERROR));
                    }
                },
                None => match client.create(&draft).await {
                    Ok(created) => {
                        set_users.update(|users| users.push(created));
                        set_show_form_modal.set(false);
                        set_error.update(record_success);
                    }
                    Err(e) => {
                        tracing::error!("Error creating user: {e}");
                        set_error.update(|slot| record_failure(slot, CREATE_ERROR));
                    }
                },
            }
            set_saving.set(false);
        });
    };

    // Confirmed delete. On failure the collection is untouched and the
    // modal stays open.
    let on_confirm_delete = move || {
        let Some(target) = deleting_user.get_untracked() else {
            return;
        };
        spawn_local(async move {
            set_deleting.set(true);
            let client = UsersClient::default();
            match client.delete(target.id).await {
                Ok(()) => {
                    set_users.update(|users| {
                        remove_by_id(users, target.id);
                    });
                    set_deleting_user.set(None);
                    set_error.update(record_success);
                }
                Err(e) => {
                    tracing::error!("Error deleting user: {e}");
                    set_error.update(|slot| record_failure(slot, DELETE_ERROR));
                }
            }
            set_deleting.set(false);
        });
    };

    view! {
        <div class="flex-1 overflow-auto p-6">
            <div class="max-w-7xl mx-auto">
                // Header
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h1 class="text-2xl font-bold text-white">"User List"</h1>
                        <p class="text-slate-400 mt-1">"Browse, create, edit, and delete users"</p>
                    </div>

                    <button
                        class="flex items-center gap-2 px-4 py-2 bg-blue-500 hover:bg-blue-600 \
                               text-white font-medium rounded-lg transition-colors"
                        on:click=move |_| {
                            set_editing_user.set(None);
                            set_show_form_modal.set(true);
                        }
                    >
                        <PlusIcon class="w-4 h-4" />
                        "Add New User"
                    </button>
                </div>

                // Error display (shared by all four operations)
                {move || {
                    if let Some(err) = error.get() {
                        view! {
                            <div class="bg-red-500/10 border border-red-500/30 rounded-lg p-4 mb-6">
                                <p class="text-red-400">{err}</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}

                // Users table
                <UsersTable
                    users=users
                    on_edit=move |user| {
                        set_editing_user.set(Some(user));
                        set_show_form_modal.set(true);
                    }
                    on_delete=move |user| set_deleting_user.set(Some(user))
                />

                // Create/Edit User Modal
                <Show when=move || show_form_modal.get()>
                    <UserFormModal
                        user=editing_user.get_untracked()
                        saving=saving
                        on_close=move || {
                            set_show_form_modal.set(false);
                            set_editing_user.set(None);
                        }
                        on_submit=on_submit
                    />
                </Show>

                // Delete Confirmation Modal
                <Show when=move || deleting_user.get().is_some()>
                    {move || {
                        if let Some(user) = deleting_user.get() {
                            view! {
                                <DeleteConfirmModal
                                    user=user
                                    deleting=deleting
                                    on_close=move || set_deleting_user.set(None)
                                    on_confirm=on_confirm_delete
                                />
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </Show>
            </div>
        </div>
    }
}

// ============================================================================
// Users Table Component
// ============================================================================

#[component]
fn UsersTable(
    users: ReadSignal<Vec<User>>,
    on_edit: impl Fn(User) + Clone + 'static,
    on_delete: impl Fn(User) + Clone + 'static,
) -> impl IntoView {
    view! {
        <div class="bg-slate-800 rounded-xl border border-slate-700 overflow-hidden">
            {move || {
                let items = users.get();

                if items.is_empty() {
                    view! {
                        <EmptyState />
                    }.into_view()
                } else {
                    let on_edit = on_edit.clone();
                    let on_delete = on_delete.clone();

                    view! {
                        <div class="overflow-x-auto">
                            <table class="w-full text-left">
                                <thead class="bg-slate-800/50 border-b border-slate-700">
                                    <tr>
                                        <th class="px-6 py-4 text-xs font-medium text-slate-400 uppercase tracking-wider">"ID"</th>
                                        <th class="px-6 py-4 text-xs font-medium text-slate-400 uppercase tracking-wider">"Name"</th>
                                        <th class="px-6 py-4 text-xs font-medium text-slate-400 uppercase tracking-wider">"Email"</th>
                                        <th class="px-6 py-4 text-xs font-medium text-slate-400 uppercase tracking-wider">"Phone"</th>
                                        <th class="px-6 py-4 text-right text-xs font-medium text-slate-400 uppercase tracking-wider">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-slate-700">
                                    {items.into_iter().map(|user| {
                                        let user_edit = user.clone();
                                        let user_delete = user.clone();
                                        let on_edit = on_edit.clone();
                                        let on_delete = on_delete.clone();

                                        view! {
                                            <tr class="hover:bg-slate-700/30 transition-colors">
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <span class="text-sm text-slate-500">{user.id}</span>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <span class="text-sm font-medium text-white">{user.name.clone()}</span>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <span class="text-sm text-slate-300">{user.email.clone()}</span>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <span class="text-sm text-slate-300">{user.phone.clone()}</span>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-right">
                                                    <div class="flex items-center justify-end gap-1">
                                                        <a
                                                            href=format!("/user/{}", user.id)
                                                            class="px-3 py-2 text-sm text-blue-400 hover:text-blue-300 transition-colors"
                                                        >
                                                            "View Details"
                                                        </a>

                                                        <button
                                                            class="p-2 text-slate-400 hover:text-white hover:bg-slate-700 rounded-lg transition-colors"
                                                            title="Edit user"
                                                            on:click=move |_| on_edit(user_edit.clone())
                                                        >
                                                            <EditIcon class="w-4 h-4" />
                                                        </button>

                                                        <button
                                                            class="p-2 text-slate-400 hover:text-red-400 hover:bg-red-500/10 rounded-lg transition-colors"
                                                            title="Delete user"
                                                            on:click=move |_| on_delete(user_delete.clone())
                                                        >
                                                            <TrashIcon class="w-4 h-4" />
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }).collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

// ============================================================================
// Empty State
// ============================================================================

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16">
            <div class="w-16 h-16 rounded-full bg-slate-700 flex items-center justify-center mb-6">
                <UsersIcon class="w-8 h-8 text-slate-400" />
            </div>
            <h2 class="text-xl font-semibold text-white mb-2">"No Users"</h2>
            <p class="text-slate-400 text-center max-w-md">
                "Get started by adding your first user."
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdir_shared::{Address, Company};

    fn sample(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: String::new(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "1".to_string(),
            website: String::new(),
            address: Address {
                street: "S".to_string(),
                city: "C".to_string(),
            },
            company: Company::default(),
        }
    }

    #[test]
    fn messages_are_non_empty_and_operation_specific() {
        let messages = [FETCH_ERROR, CREATE_ERROR, UPDATE_ERROR, DELETE_ERROR];
        for m in messages {
            assert!(!m.is_empty());
        }
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn failure_records_the_message_and_leaves_the_collection_untouched() {
        let mut users = vec![sample(1, "Leanne")];
        let snapshot = users.clone();
        let mut error = None;

        record_failure(&mut error, UPDATE_ERROR);

        assert_eq!(error.as_deref(), Some(UPDATE_ERROR));
        assert_eq!(users, snapshot);

        // Collection patching only ever runs on the success path
        assert!(replace_by_id(&mut users, sample(1, "Leanne Graham")));
        record_success(&mut error);
        assert_eq!(error, None);
    }

    #[test]
    fn most_recent_failure_wins() {
        let mut error = None;

        record_failure(&mut error, CREATE_ERROR);
        record_failure(&mut error, DELETE_ERROR);

        assert_eq!(error.as_deref(), Some(DELETE_ERROR));
    }

    #[test]
    fn failed_fetch_then_successful_create_clears_the_message() {
        // Network failure on initial fetch: collection stays empty, the
        // fetch-specific message is shown.
        let mut users = Vec::<User>::new();
        let mut error = None;
        record_failure(&mut error, FETCH_ERROR);

        assert!(users.is_empty());
        assert_eq!(error.as_deref(), Some(FETCH_ERROR));

        // A later successful create appends and clears the slot.
        users.push(sample(11, "A"));
        record_success(&mut error);

        assert_eq!(users.len(), 1);
        assert_eq!(error, None);
    }
}
