use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use carta_core::pager::{PagePosition, PageSet};
use carta_core::restaurant::RestaurantRecord;
use carta_io::api::{ApiClient, ApiError};
use carta_io::{BannerEditor, MenuViewer, PageDock};

fn main() {
    dioxus::launch(app);
}

/// Which top-level view the current pathname selects.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    Landing,
    Admin,
    Menu(String),
}

/// Map a pathname onto a route. Menus live at `/{slug}`; anything
/// deeper falls back to the landing view.
fn parse_route(path: &str) -> Route {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Route::Landing
    } else if trimmed == "admin" {
        Route::Admin
    } else if trimmed.contains('/') {
        Route::Landing
    } else {
        Route::Menu(trimmed.to_owned())
    }
}

/// Root application component: resolves the route once and mounts the
/// matching view.
fn app() -> Element {
    let route = use_hook(|| {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned());
        parse_route(&path)
    });

    rsx! {
        // Tailwind utilities via the CDN runtime; keeps the repo free
        // of a node toolchain.
        script { src: "https://cdn.tailwindcss.com" }

        div { class: "relative min-h-screen w-full",
            match route {
                Route::Landing => rsx! { Landing {} },
                Route::Admin => rsx! { BannerEditor {} },
                Route::Menu(slug) => rsx! { MenuExperience { slug } },
            }
        }
    }
}

/// Minimal landing page.
#[component]
fn Landing() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center bg-gray-900 text-white",
            h1 { class: "text-4xl font-black mb-2", "carta" }
            p { class: "text-gray-400", "Open a menu at /your-restaurant, or edit banners at /admin." }
        }
    }
}

/// The public menu view for one restaurant.
#[component]
fn MenuExperience(slug: String) -> Element {
    let api = use_hook(ApiClient::default);

    let mut record = use_signal(|| Option::<RestaurantRecord>::None);
    let mut pages = use_signal(PageSet::default);
    let mut position = use_signal(|| PagePosition::new(0));
    let mut loading = use_signal(|| true);

    let fetch_slug = slug;
    use_future(move || {
        let api = api.clone();
        let slug = fetch_slug.clone();
        async move {
            match api.restaurant(&slug).await {
                Ok(fetched) => {
                    // Paused menus render the unavailable state and
                    // load no page images at all.
                    if fetched.is_active {
                        let set = PageSet::from_book(&fetched.book);
                        position.write().set_count(set.len());
                        pages.set(set);
                    }
                    record.set(Some(fetched));
                }
                Err(e) => {
                    // A missing record and a failed fetch render the
                    // same not-found state; only the latter is worth
                    // a log line.
                    if !matches!(e, ApiError::NotFound) {
                        error!("failed to fetch menu: {e}");
                    }
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            div { class: "min-h-screen bg-gray-900 text-white text-center pt-20", "Loading Menu..." }
        };
    }

    let current = record();
    let Some(current) = current else {
        return rsx! {
            div { class: "min-h-screen bg-gray-900 text-white text-center pt-20", "Menu not found." }
        };
    };

    if !current.is_active {
        return rsx! {
            div { class: "min-h-screen flex flex-col items-center justify-center bg-gray-900 text-white p-4 text-center",
                h1 { class: "text-3xl font-bold mb-2", "Menu Currently Unavailable" }
                p { class: "text-gray-400", "Please contact the restaurant for more information." }
            }
        };
    }

    let order_url = current
        .whatsapp_number
        .as_deref()
        .and_then(order_link);

    rsx! {
        // Page carousel, behind the overlay.
        div { class: "fixed inset-0 z-0 flex items-center justify-center bg-gray-900",
            div { class: "w-full h-full max-w-[1200px] flex items-center justify-center pt-[80px] pb-[80px] md:py-4",
                MenuViewer { pages: pages.read().urls().to_vec(), position }
            }
        }

        // Overlay: header and navigation dock. The empty middle lets
        // pointer events through to the carousel.
        main { class: "fixed inset-0 z-10 pointer-events-none select-none",
            div { class: "absolute top-0 left-0 w-full h-[200px] flex justify-between items-start p-5 md:p-8 bg-gradient-to-b from-black/60 to-transparent",
                if let Some(logo) = current.logo_url.as_ref() {
                    a { class: "pointer-events-auto", href: "#",
                        img {
                            class: "w-24 md:w-32 drop-shadow-md",
                            src: "{logo}",
                            alt: "Restaurant Logo",
                        }
                    }
                }
                if let Some(url) = order_url {
                    a {
                        class: "pointer-events-auto bg-white text-black font-extrabold py-3 px-6
                                rounded-full shadow-xl hover:bg-[#FF4F18] hover:text-white
                                transition-all uppercase text-xs md:text-sm tracking-widest",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Order Now"
                    }
                }
            }

            div { class: "absolute bottom-0 left-0 w-full h-[140px] flex items-end justify-center pb-2 bg-gradient-to-t from-black/60 to-transparent",
                div { class: "pointer-events-auto",
                    PageDock { pages: pages(), position }
                }
            }
        }
    }
}

/// `wa.me` deep link with the prefilled order message.
fn order_link(number: &str) -> Option<String> {
    if number.is_empty() {
        return None;
    }
    let message = js_sys::encode_uri_component("Hi! I would like to place an order.");
    Some(format!("https://wa.me/{number}?text={message}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pathnames_map_to_routes() {
        assert_eq!(parse_route("/"), Route::Landing);
        assert_eq!(parse_route(""), Route::Landing);
        assert_eq!(parse_route("/admin"), Route::Admin);
        assert_eq!(parse_route("/grill-town"), Route::Menu("grill-town".into()));
        assert_eq!(parse_route("/grill-town/"), Route::Menu("grill-town".into()));
        assert_eq!(parse_route("/a/b"), Route::Landing);
    }
}
