//! HTTP routes for the profile site
//!
//! One GET route per page, plus a JSON health endpoint. Handlers pull
//! records out of the shared `PlayerDirectory` and hand them to the
//! render functions; missing slugs and empty filter results become a
//! custom rejection that the recovery handler turns into a 404 page.

use crate::render;
use player_directory::PlayerDirectory;
use std::borrow::Cow;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Filter;

/// Custom rejection for pages that do not exist
#[derive(Debug)]
struct PageNotFound;

impl warp::reject::Reject for PageNotFound {}

/// Shared context injected into every handler
struct SiteContext {
    directory: Arc<PlayerDirectory>,
    site_url: String,
    featured_count: usize,
}

/// Decode a percent-encoded route segment
///
/// Country and role names may carry spaces ("south%20africa"); an
/// undecodable segment is matched as-is and will simply find nothing.
fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}

async fn home_page(ctx: Arc<SiteContext>) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::html(render::home_page(
        &ctx.directory,
        &ctx.site_url,
        ctx.featured_count,
    )))
}

async fn player_page(
    slug: String,
    ctx: Arc<SiteContext>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match ctx.directory.find_by_slug(&slug) {
        Ok(player) => Ok(warp::reply::html(render::player_page(player, &ctx.site_url))),
        Err(_) => {
            tracing::debug!("Player not found: {}", slug);
            Err(warp::reject::custom(PageNotFound))
        }
    }
}

async fn countries_page(ctx: Arc<SiteContext>) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::html(render::countries_page(&ctx.directory, &ctx.site_url)))
}

async fn country_page(
    country: String,
    ctx: Arc<SiteContext>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let country = decode_segment(&country);
    let players = ctx.directory.filter_by_country(&country);

    // An unknown country yields an empty result; the page treats that
    // as not-found
    match players.first() {
        Some(first) => {
            // Display with the stored casing, not the route segment's
            let display_country = first.country.clone();
            Ok(warp::reply::html(render::country_page(&display_country, &players, &ctx.site_url)))
        }
        None => {
            tracing::debug!("No players for country: {}", country);
            Err(warp::reject::custom(PageNotFound))
        }
    }
}

async fn roles_page(ctx: Arc<SiteContext>) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::html(render::roles_page(&ctx.directory, &ctx.site_url)))
}

async fn role_page(
    role: String,
    ctx: Arc<SiteContext>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let role = decode_segment(&role);
    let players = ctx.directory.filter_by_role(&role);

    match players.first() {
        Some(first) => {
            let display_role = first.role.clone();
            Ok(warp::reply::html(render::role_page(&display_role, &players, &ctx.site_url)))
        }
        None => {
            tracing::debug!("No players for role: {}", role);
            Err(warp::reject::custom(PageNotFound))
        }
    }
}

/// Map rejections to HTML error pages
async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    if err.is_not_found() || err.find::<PageNotFound>().is_some() {
        return Ok(warp::reply::with_status(
            warp::reply::html(render::not_found_page()),
            StatusCode::NOT_FOUND,
        ));
    }

    tracing::error!("Unhandled rejection: {:?}", err);
    Ok(warp::reply::with_status(
        warp::reply::html(render::not_found_page()),
        StatusCode::INTERNAL_SERVER_ERROR,
    ))
}

/// Create the site's route tree
pub fn create_routes(
    directory: Arc<PlayerDirectory>,
    site_url: String,
    featured_count: usize,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let ctx = Arc::new(SiteContext { directory, site_url, featured_count });
    let ctx_filter = warp::any().map(move || ctx.clone());

    let home = warp::path::end()
        .and(warp::get())
        .and(ctx_filter.clone())
        .and_then(home_page);

    let player = warp::path("players")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(ctx_filter.clone())
        .and_then(player_page);

    let countries = warp::path("countries")
        .and(warp::path::end())
        .and(warp::get())
        .and(ctx_filter.clone())
        .and_then(countries_page);

    let country = warp::path("countries")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(ctx_filter.clone())
        .and_then(country_page);

    let roles = warp::path("roles")
        .and(warp::path::end())
        .and(warp::get())
        .and(ctx_filter.clone())
        .and_then(roles_page);

    let role = warp::path("roles")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(ctx_filter.clone())
        .and_then(role_page);

    // Health check endpoint
    let health = warp::path("health").and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    });

    home.or(player)
        .or(countries)
        .or(country)
        .or(roles)
        .or(role)
        .or(health)
        .recover(handle_rejection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_directory::PlayerRecord;

    fn record(slug: &str, name: &str, country: &str, role: &str, runs: u32) -> PlayerRecord {
        PlayerRecord {
            slug: slug.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            role: role.to_string(),
            matches: 50,
            runs,
            image: format!("/images/{slug}.jpg"),
            description: None,
        }
    }

    fn test_routes() -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
        let directory = PlayerDirectory::new(vec![
            record("virat-kohli", "Virat Kohli", "India", "Batter", 27000),
            record("pat-cummins", "Pat Cummins", "Australia", "Bowler", 3100),
            record("kagiso-rabada", "Kagiso Rabada", "South Africa", "Bowler", 1500),
        ])
        .unwrap();

        create_routes(Arc::new(directory), "http://localhost:3000".to_string(), 6)
    }

    #[tokio::test]
    async fn test_home_page_renders() {
        let resp = warp::test::request().path("/").reply(&test_routes()).await;
        assert_eq!(resp.status(), 200);

        let body = String::from_utf8_lossy(resp.body());
        assert!(body.contains("Featured Players"));
        assert!(body.contains("Virat Kohli"));
    }

    #[tokio::test]
    async fn test_player_page_found() {
        let resp =
            warp::test::request().path("/players/virat-kohli").reply(&test_routes()).await;
        assert_eq!(resp.status(), 200);

        let body = String::from_utf8_lossy(resp.body());
        assert!(body.contains("Virat Kohli Profile"));
        assert!(body.contains("application/ld+json"));
    }

    #[tokio::test]
    async fn test_player_page_unknown_slug_is_404() {
        let resp = warp::test::request().path("/players/nobody").reply(&test_routes()).await;
        assert_eq!(resp.status(), 404);

        let body = String::from_utf8_lossy(resp.body());
        assert!(body.contains("404"));
    }

    #[tokio::test]
    async fn test_country_page_is_case_insensitive() {
        let routes = test_routes();

        let resp = warp::test::request().path("/countries/INDIA").reply(&routes).await;
        assert_eq!(resp.status(), 200);

        let body = String::from_utf8_lossy(resp.body());
        // Heading uses the stored casing, not the route segment's
        assert!(body.contains("India Cricket Players"));
    }

    #[tokio::test]
    async fn test_country_page_decodes_spaces() {
        let resp = warp::test::request()
            .path("/countries/south%20africa")
            .reply(&test_routes())
            .await;
        assert_eq!(resp.status(), 200);

        let body = String::from_utf8_lossy(resp.body());
        assert!(body.contains("Kagiso Rabada"));
    }

    #[tokio::test]
    async fn test_unknown_country_is_404() {
        let resp = warp::test::request().path("/countries/atlantis").reply(&test_routes()).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_role_page_lists_all_players_with_role() {
        let resp = warp::test::request().path("/roles/bowler").reply(&test_routes()).await;
        assert_eq!(resp.status(), 200);

        let body = String::from_utf8_lossy(resp.body());
        assert!(body.contains("Pat Cummins"));
        assert!(body.contains("Kagiso Rabada"));
        assert!(!body.contains("Virat Kohli Profile"));
    }

    #[tokio::test]
    async fn test_countries_index_shows_counts() {
        let resp = warp::test::request().path("/countries").reply(&test_routes()).await;
        assert_eq!(resp.status(), 200);

        let body = String::from_utf8_lossy(resp.body());
        assert!(body.contains("India"));
        assert!(body.contains("1 Player"));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let resp = warp::test::request().path("/health").reply(&test_routes()).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_unmatched_route_is_404() {
        let resp = warp::test::request().path("/no/such/page").reply(&test_routes()).await;
        assert_eq!(resp.status(), 404);
    }
}
