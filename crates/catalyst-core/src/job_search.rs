//! Job-board search links. Pure URL building; nothing is fetched.

use crate::error::{CatalystError, CatalystResult};

pub const DEFAULT_LOCATION: &str = "India";

/// Boards covered by [`search_jobs`], in output order.
pub const PLATFORMS: [&str; 6] = [
    "LinkedIn",
    "Indeed",
    "Naukri",
    "Glassdoor",
    "Wellfound",
    "Internshala",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLink {
    pub platform: &'static str,
    pub url: String,
}

/// Build one search URL per board for `job_title` in `location`.
/// An empty location falls back to [`DEFAULT_LOCATION`].
pub fn search_jobs(job_title: &str, location: &str) -> CatalystResult<Vec<JobLink>> {
    let title = job_title.trim();
    if title.is_empty() {
        return Err(CatalystError::Invalid(
            "job_title is required and cannot be empty.".into(),
        ));
    }
    let location = match location.trim() {
        "" => DEFAULT_LOCATION,
        loc => loc,
    };

    let q = encode(title);
    let l = encode(location);
    let slug = slugify(title);
    let loc_slug = slugify(location);

    let urls = [
        format!("https://www.linkedin.com/jobs/search/?keywords={q}&location={l}"),
        format!("https://www.indeed.com/jobs?q={q}&l={l}"),
        format!("https://www.naukri.com/{slug}-jobs-in-{loc_slug}"),
        format!("https://www.glassdoor.co.in/Job/jobs.htm?sc.keyword={q}&locT=C&locKeyword={l}"),
        format!("https://wellfound.com/role/r/{slug}"),
        format!("https://internshala.com/jobs/{slug}-jobs-in-{loc_slug}"),
    ];

    Ok(PLATFORMS
        .into_iter()
        .zip(urls)
        .map(|(platform, url)| JobLink { platform, url })
        .collect())
}

/// Percent-encode a query value, leaving `/` as is.
fn encode(s: &str) -> String {
    urlencoding::encode(s).replace("%2F", "/")
}

fn slugify(s: &str) -> String {
    s.to_lowercase().replace(' ', "-")
}
