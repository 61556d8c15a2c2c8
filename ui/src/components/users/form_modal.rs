//! Create/Edit User Modal
//!
//! One modal serves both operations: when `user` is set the form is seeded
//! from that record and submits as an update, otherwise it starts empty and
//! submits as a create. The draft lives only as long as the modal; cancel
//! discards it without contacting the server.
//!
//! Required-field presence is enforced by the form controls themselves
//! (`required` attributes), so the submit handler only runs for a valid
//! draft. `company.name` is optional.

use leptos::*;
use userdir_shared::{AddressField, CompanyField, DraftField, User, UserDraft};

use crate::components::common::CloseIcon;

#[component]
pub fn UserFormModal(
    user: Option<User>,
    saving: ReadSignal<bool>,
    on_close: impl Fn() + Clone + 'static,
    on_submit: impl Fn(UserDraft) + Clone + 'static,
) -> impl IntoView {
    let is_edit = user.is_some();
    let (draft, set_draft) = create_signal(
        user.as_ref().map(UserDraft::from_user).unwrap_or_default(),
    );

    let on_close_backdrop = on_close.clone();
    let on_close_header = on_close.clone();
    let on_close_cancel = on_close;

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = draft.get_untracked();
        // The `required` attributes gate submission in the browser; the
        // draft check covers submits dispatched without that validation.
        if !draft.has_required_fields() {
            return;
        }
        on_submit(draft);
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            // Backdrop
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close_backdrop()
            />

            // Modal
            <div class="relative bg-slate-800 rounded-xl border border-slate-700 shadow-2xl w-full max-w-lg mx-4">
                // Header
                <div class="flex items-center justify-between px-6 py-4 border-b border-slate-700">
                    <h2 class="text-lg font-semibold text-white">
                        {if is_edit { "Edit User" } else { "Create New User" }}
                    </h2>
                    <button
                        class="p-1 text-slate-400 hover:text-white rounded transition-colors"
                        on:click=move |_| on_close_header()
                    >
                        <CloseIcon class="w-5 h-5" />
                    </button>
                </div>

                <form on:submit=handle_submit>
                    // Body
                    <div class="p-6 space-y-4">
                        <FormField label="Name">
                            <input
                                type="text"
                                name="name"
                                class=INPUT_CLASS
                                required=true
                                prop:value=move || draft.get().name
                                on:input=move |e| {
                                    set_draft.update(|d| d.set(DraftField::Name, event_target_value(&e)))
                                }
                            />
                        </FormField>

                        <FormField label="Email">
                            <input
                                type="email"
                                name="email"
                                class=INPUT_CLASS
                                required=true
                                prop:value=move || draft.get().email
                                on:input=move |e| {
                                    set_draft.update(|d| d.set(DraftField::Email, event_target_value(&e)))
                                }
                            />
                        </FormField>

                        <FormField label="Phone">
                            <input
                                type="text"
                                name="phone"
                                class=INPUT_CLASS
                                required=true
                                prop:value=move || draft.get().phone
                                on:input=move |e| {
                                    set_draft.update(|d| d.set(DraftField::Phone, event_target_value(&e)))
                                }
                            />
                        </FormField>

                        <FormField label="Street">
                            <input
                                type="text"
                                name="address.street"
                                class=INPUT_CLASS
                                required=true
                                prop:value=move || draft.get().address.street
                                on:input=move |e| {
                                    set_draft.update(|d| {
                                        d.set(DraftField::Address(AddressField::Street), event_target_value(&e))
                                    })
                                }
                            />
                        </FormField>

                        <FormField label="City">
                            <input
                                type="text"
                                name="address.city"
                                class=INPUT_CLASS
                                required=true
                                prop:value=move || draft.get().address.city
                                on:input=move |e| {
                                    set_draft.update(|d| {
                                        d.set(DraftField::Address(AddressField::City), event_target_value(&e))
                                    })
                                }
                            />
                        </FormField>

                        <FormField label="Company Name">
                            <input
                                type="text"
                                name="company.name"
                                class=INPUT_CLASS
                                prop:value=move || draft.get().company.name
                                on:input=move |e| {
                                    set_draft.update(|d| {
                                        d.set(DraftField::Company(CompanyField::Name), event_target_value(&e))
                                    })
                                }
                            />
                        </FormField>
                    </div>

                    // Footer
                    <div class="flex items-center justify-end gap-3 px-6 py-4 border-t border-slate-700">
                        <button
                            type="button"
                            class="px-4 py-2 text-sm font-medium text-slate-400 hover:text-white \
                                   rounded-lg transition-colors"
                            on:click=move |_| on_close_cancel()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 text-sm font-medium bg-blue-500 hover:bg-blue-600 \
                                   text-white rounded-lg transition-colors disabled:opacity-50"
                            disabled=move || saving.get()
                        >
                            {move || {
                                if saving.get() {
                                    "Saving..."
                                } else if is_edit {
                                    "Update User"
                                } else {
                                    "Create User"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-lg bg-slate-900 border border-slate-700 \
                           text-white text-sm placeholder-slate-500 focus:outline-none \
                           focus:ring-2 focus:ring-blue-500 focus:border-transparent";

/// Labeled form field wrapper
#[component]
fn FormField(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="block text-sm font-medium text-slate-300">{label}</label>
            {children()}
        </div>
    }
}
