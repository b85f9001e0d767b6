//! Page footer: logo, tagline, links, social icons, copyright line.

use crate::content::{FooterSection, Profile};
use crate::resolve::{self, Logo, social_icon};
use maud::{Markup, html};

pub fn render(footer: Option<&FooterSection>, profile: &Profile, year: i32) -> Markup {
    let view = resolve::footer(footer, profile, year);

    html! {
        footer id="footer" class="bg-gray-800 text-white py-12 px-4 transition-colors duration-300" {
            div class="container mx-auto max-w-5xl" {
                div class="flex flex-col md:flex-row justify-between items-center" {
                    div class="mb-8 md:mb-0" {
                        a href="#" class="text-2xl font-bold text-white font-display flex items-center" {
                            @match &view.logo {
                                Logo::Custom(text) => {
                                    (text)
                                }
                                Logo::Initials(initials) => {
                                    span class="text-blue-400 mr-1" { "<" }
                                    (initials)
                                    span class="text-blue-400 ml-1" { "/>" }
                                }
                            }
                        }
                        p class="text-gray-400 mt-2" { (view.tagline) }
                    }
                    div class="flex flex-wrap justify-center gap-6" {
                        @for link in view.links.iter() {
                            a href=(link.url) class="text-gray-300 hover:text-white transition" { (link.text) }
                        }
                    }
                    div class="mt-8 md:mt-0 flex space-x-4" {
                        @for link in view.social_links {
                            a href=(link.url) class="text-gray-300 hover:text-white transition" aria-label=(link.aria_label.as_deref().unwrap_or_default()) {
                                i class={ "fab fa-" (social_icon(link)) " text-xl" } {}
                            }
                        }
                    }
                }
                div class="border-t border-gray-700 mt-8 pt-8 text-center" {
                    p class="text-gray-400" { (view.copyright) }
                }
            }
        }
    }
}
