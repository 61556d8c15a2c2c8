//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Routing between the list and detail views
//! - The stateless page shell (header bar)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use userdir_shared::UserId;

use crate::components::users::{UserDetail, UserList};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="User Directory" />
        <Router>
            <div class="min-h-screen bg-slate-900 text-white flex flex-col">
                <HeaderBar />
                <Routes>
                    <Route path="/" view=UserListPage />
                    <Route path="/user/:id" view=UserDetailPage />

                    // Catch-all for 404
                    <Route path="/*" view=NotFoundPage />
                </Routes>
            </div>
        </Router>
    }
}

/// Stateless header bar with the app title linking home
#[component]
fn HeaderBar() -> impl IntoView {
    view! {
        <header class="border-b border-slate-700 bg-slate-800">
            <div class="max-w-7xl mx-auto px-6 py-4">
                <a href="/" class="text-lg font-semibold text-white hover:text-blue-400 transition-colors">
                    "User Directory"
                </a>
            </div>
        </header>
    }
}

/// List view - all users with CRUD actions
#[component]
fn UserListPage() -> impl IntoView {
    view! {
        <UserList />
    }
}

/// Detail view - a single user, read-only
#[component]
fn UserDetailPage() -> impl IntoView {
    let params = use_params_map();

    // Re-derived whenever the :id path segment changes
    let id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<UserId>().ok()))
    });

    view! {
        <UserDetail id=id />
    }
}

/// 404 Not Found page
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center p-6">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-600 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-6">"Page not found"</p>
                <a href="/" class="text-blue-400 hover:text-blue-300">"Go to the user list"</a>
            </div>
        </div>
    }
}
