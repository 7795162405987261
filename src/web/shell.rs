//! Navigation shell shared by every page.

use serde::Serialize;

use super::pages::{BASE_CSS, SHARED_JS};

pub const BRAND: &str = "NFL Win Prediction";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Comparison,
    Simulation,
}

impl Route {
    /// Nav order
    pub const ALL: [Route; 3] = [Route::Dashboard, Route::Comparison, Route::Simulation];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Comparison => "/comparison",
            Route::Simulation => "/simulation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Comparison => "Team Comparison",
            Route::Simulation => "Game Simulation",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}

/// Render a full HTML document: nav bar, the view body, and the view model the
/// body's script starts from.
pub fn render_page<T: Serialize>(
    active: Option<Route>,
    body: &str,
    initial_view: &T,
) -> serde_json::Result<String> {
    let title = match active {
        Some(route) => format!("{} · {}", route.label(), BRAND),
        None => format!("Not Found · {}", BRAND),
    };
    // "</" would end the script element early
    let initial = serde_json::to_string(initial_view)?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{css}</style>
<script id="initial-view" type="application/json">{initial}</script>
<script>{shared_js}</script>
</head>
<body>
{nav}
<main>
{body}
</main>
</body>
</html>"#,
        title = html_escape(&title),
        css = BASE_CSS,
        nav = render_nav(active),
        body = body,
        initial = initial,
        shared_js = SHARED_JS,
    ))
}

fn render_nav(active: Option<Route>) -> String {
    let links: String = Route::ALL
        .into_iter()
        .map(|route| {
            let current = if Some(route) == active {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                route.path(),
                current,
                html_escape(route.label())
            )
        })
        .collect();

    format!(
        r#"<nav>
  <div class="brand"><span class="brand-mark">▮▮</span><h1>{}</h1></div>
  <div class="links">{}</div>
</nav>"#,
        html_escape(BRAND),
        links
    )
}

/// Body for any path that matches no route.
pub fn not_found_body(path: &str) -> String {
    format!(
        r#"<section class="panel not-found">
  <h2>Page not found</h2>
  <p>No view is mounted at <code>{}</code>.</p>
  <p><a href="/">Back to the dashboard</a></p>
</section>"#,
        html_escape(path)
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
