//! Static dashboard asset routes.
//!
//! A fixed manifest of URL route -> file path beneath the asset root, not a
//! directory listing: only these files are ever served. `ServeFile` answers
//! 404 when a file is missing on disk and 405 for non-GET/HEAD methods.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeFile;

use crate::state::AppState;

/// URL routes and their file paths relative to the static root.
const ASSET_MANIFEST: &[(&str, &str)] = &[
    ("/style.css", "css/style.css"),
    ("/ChartConfig.js", "js/ChartConfig.js"),
    ("/fullscreenChart.js", "js/fullscreenChart.js"),
    ("/statsLoader.js", "js/statsLoader.js"),
    ("/MoviesByReleaseYearChart.js", "js/charts/MoviesByReleaseYearChart.js"),
    ("/MoviesByGenrePieChart.js", "js/charts/MoviesByGenrePieChart.js"),
    ("/MoviesWatchedOverTimeChart.js", "js/charts/MoviesWatchedOverTimeChart.js"),
    ("/TopDirectorsChart.js", "js/charts/TopDirectorsChart.js"),
    ("/TopActorsChart.js", "js/charts/TopActorsChart.js"),
    ("/mostRewatchedMovies.js", "js/charts/mostRewatchedMovies.js"),
];

/// Mount the index document and every manifest asset under the given root.
pub fn router(static_dir: &Path) -> Router<AppState> {
    let mut router = Router::new().route_service("/", ServeFile::new(static_dir.join("index.html")));

    for (route, rel_path) in ASSET_MANIFEST {
        router = router.route_service(*route, ServeFile::new(static_dir.join(rel_path)));
    }

    router
}
