//! Contact details panel with an optional availability meter.

use super::{HeaderSpacing, level_bar, section_header};
use crate::content::{ContactItem, ContactSection};
use crate::resolve::{self, AvailabilityView, ContactInfoView};
use maud::{Markup, html};

pub fn render(contact: Option<&ContactSection>) -> Markup {
    let view = resolve::contact(contact);

    html! {
        section id="contact" class="py-20 px-4 bg-gradient-to-b from-gray-50 to-gray-100 transition-colors duration-300 contact-section" aria-labelledby="contact-title" {
            div class="container mx-auto max-w-5xl" {
                (section_header("contact", view.title, Some(view.description), HeaderSpacing::Regular))
                @if let Some(info) = &view.info {
                    (info_panel(info))
                }
            }
        }
    }
}

fn info_panel(info: &ContactInfoView<'_>) -> Markup {
    html! {
        div class="mx-auto max-w-md bg-white rounded-xl shadow-lg p-6 border border-gray-100" data-animation="animate__fadeIn" {
            h3 class="text-xl font-bold mb-6 text-gray-800" { (info.title) }
            div class="space-y-6" {
                @for item in info.items {
                    (contact_item(item))
                }
            }
            @if let Some(availability) = &info.availability {
                (availability_block(availability))
            }
        }
    }
}

fn contact_item(item: &ContactItem) -> Markup {
    html! {
        div class="flex items-start" {
            div class="w-10 h-10 rounded-full bg-primary/10 flex items-center justify-center mr-4 text-primary" {
                i class={ "fas fa-" (item.icon) } {}
            }
            div {
                h4 class="font-medium text-gray-800 mb-1" { (item.title) }
                @if item.is_link {
                    a href=(item.url.as_deref().unwrap_or_default()) class="text-primary hover:text-secondary hover:underline transition-colors" { (item.value) }
                } @else {
                    p class="text-gray-700" { (item.value) }
                }
            }
        }
    }
}

fn availability_block(availability: &AvailabilityView<'_>) -> Markup {
    html! {
        div class="mt-8" {
            h4 class="font-medium text-gray-800 mb-3" { (availability.title) }
            p class="text-gray-700 mb-4" { (availability.text) }
            @if let Some((level, label)) = &availability.bar {
                (level_bar(level, "w-full bg-gray-200 rounded-full h-2.5 mb-2", "bg-green-600 h-2.5 rounded-full"))
                p class="text-sm text-gray-500" { (label) }
            }
        }
    }
}
