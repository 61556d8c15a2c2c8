//! Delete Confirmation Modal

use leptos::*;
use userdir_shared::User;

use crate::components::common::WarningIcon;

#[component]
pub fn DeleteConfirmModal(
    user: User,
    deleting: ReadSignal<bool>,
    on_close: impl Fn() + Clone + 'static,
    on_confirm: impl Fn() + Clone + 'static,
) -> impl IntoView {
    let on_close_backdrop = on_close.clone();
    let on_close_cancel = on_close;

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            // Backdrop
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close_backdrop()
            />

            // Modal
            <div class="relative bg-slate-800 rounded-xl border border-slate-700 shadow-2xl w-full max-w-md mx-4">
                <div class="p-6 text-center">
                    <div class="w-16 h-16 mx-auto mb-4 rounded-full bg-red-500/10 flex items-center justify-center">
                        <WarningIcon class="w-8 h-8 text-red-400" />
                    </div>
                    <h2 class="text-xl font-semibold text-white mb-2">"Confirm Delete"</h2>
                    <p class="text-slate-400">
                        "Are you sure you want to delete " {user.name.clone()} "?"
                    </p>
                </div>

                // Actions
                <div class="flex items-center justify-end gap-3 px-6 py-4 border-t border-slate-700">
                    <button
                        class="px-4 py-2 text-sm font-medium text-slate-400 hover:text-white \
                               rounded-lg transition-colors"
                        disabled=move || deleting.get()
                        on:click=move |_| on_close_cancel()
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 text-sm font-medium bg-red-500 hover:bg-red-600 \
                               text-white rounded-lg transition-colors disabled:opacity-50"
                        disabled=move || deleting.get()
                        on:click=move |_| on_confirm()
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Yes, Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
