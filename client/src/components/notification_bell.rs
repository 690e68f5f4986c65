//! Navbar bell with unread count and a dropdown list. The list is read when the dropdown opens.

use leptos::prelude::*;

use crate::net::fetch::refresh;
use crate::state::Stores;
use crate::state::dashboard::ResourceKind;
use crate::util::presentation::format_date;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let stores = expect_context::<Stores>();
    let notes = stores.notifications;

    let on_toggle = move |_| {
        if notes.try_update(|n| n.toggle_open()).unwrap_or(false) {
            refresh(stores, ResourceKind::Notifications);
        }
    };

    let mark_read = Callback::new(move |id: String| {
        let Some(token) = stores.token() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::mark_notification_read(&token, &id).await {
                Ok(_) => refresh(stores, ResourceKind::Notifications),
                Err(e) => notes.update(|n| n.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
        }
    });

    let unread = move || notes.with(|n| n.unread_count());

    view! {
        <div class="bell">
            <button class="btn bell__button" on:click=on_toggle title="Notifications">
                "🔔"
                <Show when=move || { unread() > 0 }>
                    <span class="bell__count">{unread}</span>
                </Show>
            </button>
            <Show when=move || notes.with(|n| n.open)>
                <div class="bell__dropdown">
                    <Show when=move || notes.with(|n| n.error.is_some())>
                        <p class="bell__error">{move || notes.with(|n| n.error.clone().unwrap_or_default())}</p>
                    </Show>
                    <Show
                        when=move || notes.with(|n| !n.list.data.is_empty())
                        fallback=|| view! { <p class="bell__empty">"No notifications"</p> }
                    >
                        {move || {
                            notes
                                .with(|n| n.list.data.clone())
                                .into_iter()
                                .map(|note| {
                                    let id = note.id.clone();
                                    let read = note.read;
                                    view! {
                                        <div class="bell__item" class:bell__item--unread=!read>
                                            <strong>{note.title}</strong>
                                            <p>{note.message}</p>
                                            <span class="bell__date">{format_date(&note.created_at)}</span>
                                            <Show when=move || !read>
                                                <button
                                                    class="btn bell__mark"
                                                    on:click={
                                                        let id = id.clone();
                                                        move |_| mark_read.run(id.clone())
                                                    }
                                                >
                                                    "Mark read"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </Show>
                </div>
            </Show>
        </div>
    }
}
