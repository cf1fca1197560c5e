//! Server-rendered HTML for the public pages.
//!
//! The redirect page shows which app is being opened, then navigates to
//! the store after a fixed short delay via a meta refresh. The delay is
//! deliberate (no instant blank flash) and is not configurable per record.

use applink_core::AppLinkRecord;

/// Fixed delay before a mobile visitor is sent to the store.
pub const REDIRECT_DELAY_SECONDS: u32 = 1;

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn shell(title: &str, body: &str, head_extra: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         {head_extra}\
         </head>\n\
         <body>\n\
         <main class=\"card\">\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// Mobile visitors: announce the target, then navigate after the delay.
pub fn redirecting(record: &AppLinkRecord, target_url: &str, store_label: &str) -> String {
    let refresh = format!(
        "<meta http-equiv=\"refresh\" content=\"{REDIRECT_DELAY_SECONDS};url={}\">\n",
        escape(target_url)
    );
    let body = format!(
        "<h1>Redirecting&hellip;</h1>\n\
         <p>{}</p>\n\
         <p class=\"muted\">Opening {}</p>\n",
        escape(&record.name),
        escape(store_label),
    );
    shell("Redirecting…", &body, &refresh)
}

/// Desktop visitors: both store links as plain outbound links, no
/// automatic navigation.
pub fn landing(record: &AppLinkRecord) -> String {
    let body = format!(
        "<h1>{}</h1>\n\
         <p>This app installs on mobile devices. Open this link on your phone,\n\
         or pick a store below.</p>\n\
         <p><a href=\"{}\" rel=\"noopener noreferrer\">App Store</a></p>\n\
         <p><a href=\"{}\" rel=\"noopener noreferrer\">Google Play</a></p>\n",
        escape(&record.name),
        escape(&record.app_store_url),
        escape(&record.play_store_url),
    );
    shell(&record.name, &body, "")
}

pub fn not_found() -> String {
    let body = "<h1>App Not Found</h1>\n\
                <p>This link is invalid or the app is no longer available.</p>\n\
                <p><a href=\"/\">Back to home</a></p>\n";
    shell("App Not Found", body, "")
}

pub fn service_error() -> String {
    let body = "<h1>Something went wrong</h1>\n\
                <p>Please try again in a moment.</p>\n\
                <p><a href=\"/\">Back to home</a></p>\n";
    shell("Something went wrong", body, "")
}

pub fn home() -> String {
    let body = "<h1>Our Games</h1>\n\
                <p>App links, privacy policies, and account requests for our\n\
                mobile games live here.</p>\n";
    shell("Home", body, "")
}
