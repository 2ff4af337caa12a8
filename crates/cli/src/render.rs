//! Plain-text rendering of page snapshots.

#![allow(clippy::print_stdout)]

use societies_core::view::{
    FaqBrowser, ListView, QuickStats, RequestStats, SettingsTab, SocietyCard, Toast, ToastKind,
};
use societies_core::{Faq, JoinRequest, Society, SocietySettings};

pub fn line(text: &str) {
    println!("{text}");
}

pub fn section(title: &str) {
    println!();
    println!("== {title} ==");
}

pub fn quick_stats(stats: &QuickStats) {
    println!(
        "{} societies ({} as admin, {} as member), {} members in total",
        stats.total, stats.as_admin, stats.as_member, stats.total_members
    );
}

/// Render the cards for the societies in `view`.
pub fn society_cards(view: &ListView<'_, Society>, cards: &[SocietyCard]) {
    match view {
        ListView::Loading => println!("  Loading..."),
        ListView::Empty => println!("  No societies found."),
        ListView::Items(societies) => {
            for society in societies {
                let Some(card) = cards.iter().find(|c| c.id == society.id) else {
                    continue;
                };
                println!(
                    "  [{}] {} ({}, {}) {}",
                    card.id,
                    card.name,
                    card.category,
                    card.member_label,
                    card.route()
                );
                if !card.excerpt.is_empty() {
                    println!("      {}", card.excerpt);
                }
            }
        }
    }
}

pub fn request_stats(stats: &RequestStats) {
    println!(
        "Total {} | Pending {} | Approved {} | Rejected {}",
        stats.total, stats.pending, stats.approved, stats.rejected
    );
}

pub fn requests(view: &ListView<'_, JoinRequest>) {
    match view {
        ListView::Loading => println!("  Loading..."),
        ListView::Empty => println!("  No join requests."),
        ListView::Items(requests) => {
            for request in requests {
                println!(
                    "  [{}] {:<24} {:<32} {}",
                    request.id, request.user_name, request.user_email, request.status
                );
            }
        }
    }
}

pub fn request_details(request: Option<&JoinRequest>) {
    let Some(request) = request else {
        println!("  Select a request to see its details.");
        return;
    };
    println!("  {} <{}>", request.user_name, request.user_email);
    println!("  Status: {}", request.status);
    if let Some(at) = request.requested_at {
        println!("  Requested: {}", at.format("%Y-%m-%d %H:%M UTC"));
    }
    if let Some(message) = &request.message {
        println!("  Message: {message}");
    }
}

fn flag(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

pub fn settings_panel(tab: SettingsTab, settings: &SocietySettings) {
    let tabs: Vec<String> = SettingsTab::ALL
        .iter()
        .map(|t| {
            if *t == tab {
                format!("[{}]", t.label())
            } else {
                t.label().to_string()
            }
        })
        .collect();
    println!("{}", tabs.join("  "));
    println!();

    match tab {
        SettingsTab::General => {
            let general = &settings.general;
            println!("general.name         {}", general.name);
            println!("general.description  {}", general.description);
            println!("general.category     {}", general.category);
            println!(
                "general.image_url    {}",
                general.image_url.as_deref().unwrap_or("-")
            );
        }
        SettingsTab::Privacy => {
            let privacy = &settings.privacy;
            println!("privacy.visibility        {}", privacy.visibility);
            println!("privacy.join_policy       {}", privacy.join_policy);
            println!(
                "privacy.show_member_list  {}",
                flag(privacy.show_member_list)
            );
        }
        SettingsTab::Permissions => {
            let permissions = &settings.permissions;
            println!("permissions.event_creation  {}", permissions.event_creation);
            println!("permissions.posting         {}", permissions.posting);
            println!("permissions.invitations     {}", permissions.invitations);
        }
        SettingsTab::Notifications => {
            let notifications = &settings.notifications;
            println!(
                "notifications.join_requests    {}",
                flag(notifications.join_requests)
            );
            println!(
                "notifications.new_members      {}",
                flag(notifications.new_members)
            );
            println!(
                "notifications.event_reminders  {}",
                flag(notifications.event_reminders)
            );
            println!(
                "notifications.weekly_digest    {}",
                flag(notifications.weekly_digest)
            );
        }
        SettingsTab::Danger => {
            println!("societies leave <id>             leave this society");
            println!("societies delete <id> --confirm  delete this society");
        }
    }
}

pub fn toasts(toasts: &[Toast]) {
    for toast in toasts {
        match toast.kind {
            ToastKind::Success => println!("OK: {}", toast.message),
            ToastKind::Error => println!("Error: {}", toast.message),
        }
    }
}

pub fn faqs(browser: &FaqBrowser, faqs: &[&Faq]) {
    if faqs.is_empty() {
        println!("No matching questions.");
        return;
    }
    for faq in faqs {
        println!("Q: {}", faq.question);
        if browser.is_open(faq.id) {
            println!("A: {}", faq.answer);
        }
        println!();
    }
}
