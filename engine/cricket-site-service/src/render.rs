//! Server-side HTML rendering for the profile pages
//!
//! Pages are assembled as strings from the directory's query results.
//! Every dataset-derived value goes through `escape_html` before it is
//! interpolated into markup.

use crate::seo::{item_list_json_ld, json_ld_script, person_json_ld, PageMeta};
use player_directory::{PlayerDirectory, PlayerRecord};

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#111827;background:#f8fafc}\
a{color:inherit;text-decoration:none}\
header{background:#1e3a8a;color:#fff;padding:16px 24px;display:flex;gap:24px;align-items:center}\
header a:hover{text-decoration:underline}\
main{max-width:1100px;margin:0 auto;padding:32px 24px}\
h1{font-size:2.2rem;margin:0 0 8px}\
.sub{color:#6b7280;margin:0 0 24px}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:20px}\
.card{background:#fff;border:1px solid #e5e7eb;border-radius:16px;padding:20px;display:block}\
.card:hover{box-shadow:0 8px 24px rgba(0,0,0,.08)}\
.avatar{width:56px;height:56px;border-radius:50%;background:#dbeafe;color:#1d4ed8;\
display:flex;align-items:center;justify-content:center;font-weight:600;margin-bottom:12px}\
.chip{display:inline-block;background:#dbeafe;color:#1d4ed8;border-radius:999px;\
padding:4px 12px;font-size:.8rem;font-weight:500}\
.stats{display:grid;grid-template-columns:repeat(auto-fit,minmax(140px,1fr));gap:12px;margin-top:16px}\
.stat{background:#f9fafb;border:1px solid #e5e7eb;border-radius:8px;padding:16px;text-align:center}\
.stat .label{font-size:.7rem;text-transform:uppercase;letter-spacing:.08em;color:#6b7280}\
.stat .value{font-size:1.3rem;font-weight:600;margin-top:6px}\
.breadcrumb{font-size:.875rem;color:#6b7280;margin-bottom:20px}\
.hero{background:linear-gradient(to right,#1d4ed8,#1e3a8a);color:#fff;\
border-radius:16px;padding:28px 32px;margin-bottom:28px}\
.hero p{color:#e5e7eb}\
footer{text-align:center;color:#9ca3af;font-size:.8rem;padding:24px}";

/// Escape a string for interpolation into HTML text or attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap a page body in the shared document shell
fn layout(head: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {head}<style>{STYLE}</style>\n</head>\n<body>\n\
         <header>\n\
         <a href=\"/\"><strong>Cricket Profiles</strong></a>\n\
         <nav><a href=\"/countries\">Countries</a> · <a href=\"/roles\">Roles</a></nav>\n\
         </header>\n\
         <main>\n{body}</main>\n\
         <footer>Server-rendered cricket player profiles</footer>\n\
         </body>\n</html>\n"
    )
}

/// Lowercased, percent-encoded path segment for country/role links
fn path_segment(value: &str) -> String {
    urlencoding::encode(&value.to_lowercase()).into_owned()
}

/// Initials for the avatar badge (e.g., "Virat Kohli" -> "VK")
fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|w| w.chars().next()).collect()
}

fn stat(label: &str, value: &str) -> String {
    format!(
        "<div class=\"stat\"><p class=\"label\">{}</p><p class=\"value\">{}</p></div>",
        escape_html(label),
        escape_html(value)
    )
}

fn player_card(p: &PlayerRecord) -> String {
    format!(
        "<article><a class=\"card\" href=\"/players/{slug}\" aria-label=\"View profile of {name}\">\
         <div class=\"avatar\">{initials}</div>\
         <h3>{name}</h3>\
         <p class=\"sub\">{country}</p>\
         <p>Matches played: <strong>{matches}</strong></p>\
         <p><span class=\"chip\">{role}</span></p>\
         </a></article>",
        slug = escape_html(&p.slug),
        name = escape_html(&p.name),
        initials = escape_html(&initials(&p.name)),
        country = escape_html(&p.country),
        matches = p.matches,
        role = escape_html(&p.role),
    )
}

/// Home page: hero, featured players, country and role navigation
pub fn home_page(directory: &PlayerDirectory, site_url: &str, featured_count: usize) -> String {
    let featured = directory.top_by_runs(featured_count);

    let meta = PageMeta {
        title: "Cricket Player Stats & Profiles".to_string(),
        description: "Explore cricket player profiles, statistics, and career records."
            .to_string(),
        canonical: site_url.to_string(),
        og_type: "website",
        og_image: Some(format!("{site_url}/og-image.png")),
    };
    let json_ld = item_list_json_ld(
        "Featured Cricket Players",
        "Featured cricket players ranked by career runs.",
        site_url,
        &featured,
        site_url,
    );
    let head = format!("{}{}", meta.render(), json_ld_script(&json_ld));

    let cards: String = featured.iter().copied().map(player_card).collect();
    let country_chips: String = directory
        .distinct_countries()
        .iter()
        .map(|c| {
            format!("<a class=\"chip\" href=\"/countries/{}\">{}</a> ", path_segment(c), escape_html(c))
        })
        .collect();
    let role_chips: String = directory
        .distinct_roles()
        .iter()
        .map(|r| {
            format!("<a class=\"chip\" href=\"/roles/{}\">{}</a> ", path_segment(r), escape_html(r))
        })
        .collect();

    let body = format!(
        "<div class=\"hero\"><h1>Cricket Player Profiles</h1>\
         <p>Discover international cricket players, their roles, and career statistics.</p></div>\
         <h2>Featured Players</h2>\
         <div class=\"grid\">{cards}</div>\
         <h2>Browse by Country</h2><p>{country_chips}</p>\
         <h2>Browse by Role</h2><p>{role_chips}</p>"
    );

    layout(&head, &body)
}

/// Player profile page
pub fn player_page(player: &PlayerRecord, site_url: &str) -> String {
    let description = player.description.clone().unwrap_or_else(|| {
        format!(
            "{} is a professional cricketer. View profile, role, matches, and career stats.",
            player.name
        )
    });

    let meta = PageMeta {
        title: format!("{} Profile | Cricket Stats", player.name),
        description: description.clone(),
        canonical: format!("{site_url}/players/{}", player.slug),
        og_type: "profile",
        og_image: Some(format!("{site_url}{}", player.image)),
    };
    let head = format!("{}{}", meta.render(), json_ld_script(&person_json_ld(player, site_url)));

    let body = format!(
        "<nav class=\"breadcrumb\"><a href=\"/\">Home</a> / \
         <a href=\"/countries\">Countries</a> / <strong>{name}</strong></nav>\
         <section class=\"card\">\
         <h1>{name}</h1>\
         <p class=\"sub\">{role} · {country}</p>\
         <img src=\"{image}\" alt=\"{name}\" width=\"160\" height=\"160\" loading=\"lazy\">\
         <div class=\"stats\">{matches_stat}{runs_stat}</div>\
         <p>{description}</p>\
         </section>",
        name = escape_html(&player.name),
        role = escape_html(&player.role),
        country = escape_html(&player.country),
        image = escape_html(&player.image),
        matches_stat = stat("Matches", &player.matches.to_string()),
        runs_stat = stat("Runs", &player.runs.to_string()),
        description = escape_html(&description),
    );

    layout(&head, &body)
}

/// Country index page: one card per distinct country with its player count
pub fn countries_page(directory: &PlayerDirectory, site_url: &str) -> String {
    let counts = directory.count_by_country();

    let meta = PageMeta {
        title: "All Countries | Cricket Players".to_string(),
        description: "Explore cricket players by country.".to_string(),
        canonical: format!("{site_url}/countries"),
        og_type: "website",
        og_image: None,
    };

    let cards: String = directory
        .distinct_countries()
        .iter()
        .map(|country| {
            // Counts are keyed by the exact stored value, so a distinct
            // country always has an entry
            let count = counts.get(*country).copied().unwrap_or(0);
            let plural = if count == 1 { "Player" } else { "Players" };
            format!(
                "<a class=\"card\" href=\"/countries/{}\">\
                 <h2>{}</h2><p class=\"sub\">{count} {plural}</p>\
                 <span class=\"chip\">View Players</span></a>",
                path_segment(country),
                escape_html(country),
            )
        })
        .collect();

    let body = format!(
        "<h1>Explore Countries</h1>\
         <p class=\"sub\">Discover cricket players by country.</p>\
         <div class=\"grid\">{cards}</div>"
    );

    layout(&meta.render(), &body)
}

/// Single-country page: all players from one country
///
/// `display_country` carries the stored casing of the first matching
/// record, not the route segment's casing.
pub fn country_page(display_country: &str, players: &[&PlayerRecord], site_url: &str) -> String {
    grouped_players_page(
        &format!("{display_country} Cricket Players"),
        &format!("List of cricket players from {display_country}."),
        &format!("{site_url}/countries/{}", path_segment(display_country)),
        display_country,
        players,
        site_url,
    )
}

/// Role index page
pub fn roles_page(directory: &PlayerDirectory, site_url: &str) -> String {
    let meta = PageMeta {
        title: "All Roles | Cricket Players".to_string(),
        description: "Explore cricket players by playing role.".to_string(),
        canonical: format!("{site_url}/roles"),
        og_type: "website",
        og_image: None,
    };

    let cards: String = directory
        .distinct_roles()
        .iter()
        .map(|role| {
            let count = directory.filter_by_role(role).len();
            let plural = if count == 1 { "Player" } else { "Players" };
            format!(
                "<a class=\"card\" href=\"/roles/{}\">\
                 <h2>{}</h2><p class=\"sub\">{count} {plural}</p>\
                 <span class=\"chip\">View Players</span></a>",
                path_segment(role),
                escape_html(role),
            )
        })
        .collect();

    let body = format!(
        "<h1>Explore Roles</h1>\
         <p class=\"sub\">Discover cricket players by playing role.</p>\
         <div class=\"grid\">{cards}</div>"
    );

    layout(&meta.render(), &body)
}

/// Single-role page: all players with one role
pub fn role_page(display_role: &str, players: &[&PlayerRecord], site_url: &str) -> String {
    grouped_players_page(
        &format!("{display_role} Cricket Players"),
        &format!("View all cricket players who are {display_role}, with their matches and runs."),
        &format!("{site_url}/roles/{}", path_segment(display_role)),
        display_role,
        players,
        site_url,
    )
}

fn grouped_players_page(
    title: &str,
    description: &str,
    canonical: &str,
    heading: &str,
    players: &[&PlayerRecord],
    site_url: &str,
) -> String {
    let meta = PageMeta {
        title: format!("{title} | Player Stats"),
        description: description.to_string(),
        canonical: canonical.to_string(),
        og_type: "website",
        og_image: None,
    };
    let json_ld = item_list_json_ld(title, description, canonical, players, site_url);
    let head = format!("{}{}", meta.render(), json_ld_script(&json_ld));

    let cards: String = players.iter().copied().map(player_card).collect();
    let body = format!(
        "<nav class=\"breadcrumb\"><a href=\"/\">Home</a> / <strong>{}</strong></nav>\
         <h1>{}</h1>\
         <div class=\"grid\">{cards}</div>",
        escape_html(heading),
        escape_html(title),
    );

    layout(&head, &body)
}

/// Styled 404 page
pub fn not_found_page() -> String {
    let head = "<title>Page Not Found | Cricket Profiles</title>\n\
                <meta name=\"robots\" content=\"noindex\">\n";
    let body = "<h1>404 - Page Not Found</h1>\
                <p class=\"sub\">The player, country, or role you are looking for \
                does not exist.</p>\
                <p><a class=\"chip\" href=\"/\">Back to home</a></p>";
    layout(head, body)
}
