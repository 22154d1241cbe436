//! Server-rendered markup for a check-in page.
//!
//! User-entered text is escaped with `ammonia::clean_text`; the catalog and
//! quick links are trusted constants.

use ammonia::clean_text;

use crate::domain::{CheckInView, PageSession, QuickLink};

const PAGE_CSS: &str = include_str!("style.css");

pub fn render_page(page: &PageSession) -> String {
    let view = page.view();

    let mut html = String::with_capacity(8192);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Friendly check-in</title>\n<style>\n");
    html.push_str(PAGE_CSS);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"page\">\n<main class=\"main\">\n");
    html.push_str(&hero(&view));
    html.push_str("<section class=\"grid\">\n");
    html.push_str(&intention_card(page, &view));
    html.push_str(&nudge_card(&view));
    html.push_str(&links_card(view.quick_links));
    html.push_str("</section>\n</main>\n</div>\n</body>\n</html>\n");
    html
}

fn hero(view: &CheckInView) -> String {
    format!(
        "<section class=\"hero\">\n\
         <span class=\"eyebrow\">Friendly check-in</span>\n\
         <h1 class=\"heading\">{}</h1>\n\
         <p class=\"subheading\">{}</p>\n\
         </section>\n",
        clean_text(&view.greeting),
        clean_text(&view.subheading),
    )
}

fn intention_card(page: &PageSession, view: &CheckInView) -> String {
    format!(
        "<article class=\"card\">\n\
         <header class=\"card-header\">\n<h2>Set your intention</h2>\n<p>{intention_line}</p>\n</header>\n\
         <form class=\"form\" method=\"post\" action=\"/pages/{id}\">\n\
         <label class=\"label\"><span>Your name</span>\
         <input name=\"name\" value=\"{name}\" placeholder=\"Type a nickname or leave it blank\"></label>\n\
         <label class=\"label\"><span>Today I want to...</span>\
         <input name=\"focus\" value=\"{focus}\" placeholder=\"Call a friend, finish a draft, stretch...\"></label>\n\
         <button type=\"submit\">Save this moment</button>\n\
         </form>\n</article>\n",
        intention_line = clean_text(&view.intention_line),
        id = page.id,
        name = clean_text(&page.state.name_draft),
        focus = clean_text(&page.state.focus_draft),
    )
}

fn nudge_card(view: &CheckInView) -> String {
    format!(
        "<article class=\"card\">\n\
         <header class=\"card-header\">\n<h2>Gentle nudge</h2>\n<p>A tiny idea to nurture the day.</p>\n</header>\n\
         <p class=\"suggestion\">{}</p>\n</article>\n",
        view.suggestion
    )
}

fn links_card(links: &[QuickLink]) -> String {
    let items: String = links.iter().map(link_item).collect();

    format!(
        "<article class=\"card\">\n\
         <header class=\"card-header\">\n<h2>Quick jump</h2>\n<p>Keep connections easy and warm.</p>\n</header>\n\
         <ul class=\"link-list\">\n{items}</ul>\n</article>\n"
    )
}

fn link_item(link: &QuickLink) -> String {
    format!(
        "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">\
         <span class=\"link-title\">{}</span>\
         <span class=\"link-description\">{}</span></a></li>\n",
        link.href, link.title, link.description
    )
}
