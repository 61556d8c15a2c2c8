//! User Detail Component
//!
//! Read-only view of a single user, fetched by the id bound from the
//! route. Re-fetches whenever the id changes. Fetch failures are logged
//! but never surfaced to the user; the prior record (or the loading
//! placeholder) stays on screen.

use leptos::*;
use userdir_shared::{User, UserId};

use crate::client::UsersClient;

/// User detail view
#[component]
pub fn UserDetail(#[prop(into)] id: Signal<Option<UserId>>) -> impl IntoView {
    let (user, set_user) = create_signal(Option::<User>::None);

    // Fetch whenever the route's id parameter changes
    create_effect(move |_| {
        let Some(id) = id.get() else {
            tracing::error!("Error fetching user details: invalid id in route");
            return;
        };
        spawn_local(async move {
            let client = UsersClient::default();
            match client.get(id).await {
                Ok(fetched) => set_user.set(Some(fetched)),
                Err(e) => tracing::error!("Error fetching user details: {e}"),
            }
        });
    });

    view! {
        <div class="flex-1 overflow-auto p-6">
            <div class="max-w-3xl mx-auto">
                <a href="/" class="inline-block mb-6 text-sm text-blue-400 hover:text-blue-300">
                    "← Back to users"
                </a>

                {move || {
                    if let Some(u) = user.get() {
                        view! {
                            <div class="bg-slate-800 rounded-xl border border-slate-700 p-6">
                                <h1 class="text-2xl font-bold text-white mb-6">"User Details"</h1>
                                <dl class="grid grid-cols-1 md:grid-cols-2 gap-x-8 gap-y-4">
                                    <DetailField label="Name" value=u.name.clone() />
                                    <DetailField label="Username" value=u.username.clone() />
                                    <DetailField label="Email" value=u.email.clone() />
                                    <DetailField label="Phone" value=u.phone.clone() />
                                    <DetailField label="Website" value=u.website.clone() />
                                    <DetailField label="Company" value=u.company.name.clone() />
                                    <DetailField
                                        label="Address"
                                        value=format!("{}, {}", u.address.street, u.address.city)
                                    />
                                </dl>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="text-slate-400 text-center py-16">
                                "Loading..."
                            </div>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// One labeled read-only field
#[component]
fn DetailField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <dt class="text-sm text-slate-500">{label}</dt>
            <dd class="text-white mt-1">{value}</dd>
        </div>
    }
}
