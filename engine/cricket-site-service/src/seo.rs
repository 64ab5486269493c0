//! Search-engine metadata: meta tags, Open Graph, JSON-LD

use crate::render::escape_html;
use player_directory::PlayerRecord;
use serde_json::json;

/// Meta tags for one page's head block
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    /// Open Graph object type ("website" or "profile")
    pub og_type: &'static str,
    pub og_image: Option<String>,
}

impl PageMeta {
    /// Render the head block: title, description, canonical link,
    /// Open Graph tags
    pub fn render(&self) -> String {
        let title = escape_html(&self.title);
        let description = escape_html(&self.description);
        let canonical = escape_html(&self.canonical);

        let mut head = format!(
            "<title>{title}</title>\n\
             <meta name=\"description\" content=\"{description}\">\n\
             <meta name=\"robots\" content=\"index, follow\">\n\
             <link rel=\"canonical\" href=\"{canonical}\">\n\
             <meta property=\"og:type\" content=\"{}\">\n\
             <meta property=\"og:title\" content=\"{title}\">\n\
             <meta property=\"og:description\" content=\"{description}\">\n\
             <meta property=\"og:url\" content=\"{canonical}\">\n",
            self.og_type
        );

        if let Some(image) = &self.og_image {
            head.push_str(&format!(
                "<meta property=\"og:image\" content=\"{}\">\n",
                escape_html(image)
            ));
        }

        head
    }
}

/// Render a JSON-LD value as a script tag
pub fn json_ld_script(value: &serde_json::Value) -> String {
    // JSON-LD goes inside a script tag, so escape the one sequence
    // that could close it early
    let json = value.to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{json}</script>\n")
}

/// schema.org Person block for a player profile page
pub fn person_json_ld(player: &PlayerRecord, site_url: &str) -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": player.name,
        "description": player.description,
        "nationality": player.country,
        "jobTitle": player.role,
        "image": format!("{site_url}{}", player.image),
        "url": format!("{site_url}/players/{}", player.slug),
    })
}

/// schema.org ItemList block for a list of players
pub fn item_list_json_ld(
    name: &str,
    description: &str,
    url: &str,
    players: &[&PlayerRecord],
    site_url: &str,
) -> serde_json::Value {
    let items: Vec<serde_json::Value> = players
        .iter()
        .enumerate()
        .map(|(index, p)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": p.name,
                "url": format!("{site_url}/players/{}", p.slug),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": name,
        "description": description,
        "url": url,
        "itemListElement": items,
    })
}
