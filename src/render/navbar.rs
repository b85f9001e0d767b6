//! Fixed top navigation with a collapsible mobile menu.

use crate::content::{NavbarSection, Profile};
use crate::resolve::{self, Logo, link_aria};
use maud::{Markup, html};

pub fn render(navbar: Option<&NavbarSection>, profile: &Profile) -> Markup {
    let view = resolve::navbar(navbar, profile);
    let logo = match &view.logo {
        Logo::Custom(text) => text.to_string(),
        Logo::Initials(initials) => format!("<{initials}/>"),
    };

    html! {
        nav id="navbar" class="fixed w-full bg-white/80 backdrop-blur-md z-50 transition-colors duration-300" aria-label="Main navigation" {
            div class="container mx-auto px-4 md:px-6 py-4 flex justify-between items-center" {
                a href="#home" class="text-xl md:text-2xl font-bold text-primary font-display" aria-label="Go to homepage" {
                    (logo)
                }
                div class="flex items-center gap-6" {
                    div class="hidden md:flex gap-1" {
                        @for link in view.links.iter() {
                            a href=(link.url) class="px-3 py-2 rounded-md hover:text-primary transition-colors" aria-label=(link_aria(link)) {
                                (link.text)
                            }
                        }
                    }
                    button id="mobile-menu-button" class="md:hidden w-10 h-10 flex items-center justify-center" aria-label="Open mobile menu" aria-expanded="false" aria-controls="mobile-menu" {
                        i class="fas fa-bars" {}
                    }
                }
            }
            div id="mobile-menu" class="hidden md:hidden bg-white shadow-lg absolute w-full" {
                div class="container mx-auto px-4 py-3 space-y-1" {
                    @for link in view.links.iter() {
                        a href=(link.url) class="block px-3 py-2 rounded-md hover:bg-gray-100 transition-colors" {
                            (link.text)
                        }
                    }
                }
            }
        }
    }
}
