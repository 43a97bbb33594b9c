use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{FilterBand, LeaderboardSnapshot, Tier};

const PROFILE_URL_BASE: &str = "https://codeforces.com/profile";

/// Display flags that live outside the snapshot: the busy indicator, the
/// roster fallback warning and the last pass-level error.
#[derive(Debug, Default)]
pub struct PageStatus {
    pub refreshing: bool,
    pub directory_warning: Option<String>,
    pub last_error: Option<String>,
}

const FILTER_OPTIONS: [(FilterBand, &str); 5] = [
    (FilterBand::All, "All Ratings"),
    (FilterBand::Expert, "Expert (1600+)"),
    (FilterBand::Specialist, "Specialist (1400-1599)"),
    (FilterBand::Pupil, "Pupil (1200-1399)"),
    (FilterBand::Newbie, "Newbie (&lt;1200)"),
];

/// Render the whole page from a snapshot and a filter band. Pure: no
/// fetching, no sorting, no state. Band membership comes from the record's
/// rating field; rank positions are taken from the unfiltered order.
pub fn render_page(snapshot: &LeaderboardSnapshot, band: FilterBand, status: &PageStatus) -> String {
    let mut page = String::with_capacity(8 * 1024);

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str("<title>Codeforces Leaderboard</title>\n<style>");
    page.push_str(PAGE_STYLE);
    page.push_str("</style>\n</head>\n<body>\n");

    page.push_str("<header>\n<h1>Codeforces Leaderboard</h1>\n<div class=\"controls\">\n");
    page.push_str("<button id=\"refreshBtn\">Refresh Data</button>\n");
    page.push_str("<select id=\"ratingFilter\">\n");
    for (option, label) in FILTER_OPTIONS {
        let selected = if option == band { " selected" } else { "" };
        page.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            option.as_param(),
            selected,
            label
        ));
    }
    page.push_str("</select>\n</div>\n</header>\n");

    if let Some(warning) = &status.directory_warning {
        page.push_str(&format!(
            "<div class=\"notice warning\">{}</div>\n",
            encode_text(warning)
        ));
    }
    if let Some(error) = &status.last_error {
        page.push_str(&format!(
            "<div class=\"notice error\">{}</div>\n",
            encode_text(error)
        ));
    }
    if status.refreshing {
        page.push_str("<div class=\"notice loading\">Updating leaderboard&hellip;</div>\n");
    }

    page.push_str("<section class=\"stats\">\n");
    page.push_str(&stat_tile(snapshot.count.to_string(), "Tracked Users"));
    page.push_str(&stat_tile(snapshot.average_rating.to_string(), "Average Rating"));
    page.push_str(&stat_tile(snapshot.max_rating.to_string(), "Max Rating"));
    page.push_str("</section>\n");

    page.push_str("<section id=\"leaderboard\">\n");
    page.push_str(&render_rows(snapshot, band));
    page.push_str("</section>\n");

    if let Some(refreshed_at) = snapshot.refreshed_at {
        page.push_str(&format!(
            "<footer>Last updated {}</footer>\n",
            refreshed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    page.push_str("<script>");
    page.push_str(PAGE_SCRIPT);
    page.push_str("</script>\n</body>\n</html>\n");

    page
}

fn render_rows(snapshot: &LeaderboardSnapshot, band: FilterBand) -> String {
    let mut rows = String::new();

    for (index, record) in snapshot.records.iter().enumerate() {
        if !band.matches(record.rating) {
            continue;
        }

        let tier = Tier::for_rating(record.rating);
        rows.push_str(&format!(
            concat!(
                "<div class=\"leaderboard-entry\">\n",
                "<div class=\"rank\">{position}</div>\n",
                "<div class=\"user-info\">\n",
                "<a class=\"username\" href=\"{base}/{href_handle}\" target=\"_blank\">{handle}</a>\n",
                "<div class=\"user-details\">{title} &middot; Max: {max_rating}</div>\n",
                "</div>\n",
                "<div class=\"rating {tier_class}\">{rating}</div>\n",
                "<div class=\"contests\">{contests} contests</div>\n",
                "<div class=\"change {change_class}\">{change}</div>\n",
                "</div>\n",
            ),
            position = index + 1,
            base = PROFILE_URL_BASE,
            href_handle = encode_double_quoted_attribute(&record.handle),
            handle = encode_text(&record.handle),
            title = tier.title(),
            max_rating = record.max_rating,
            tier_class = tier.css_class(),
            rating = record.rating,
            contests = record.contest_count,
            change_class = change_class(record.rating_change),
            change = format_change(record.rating_change),
        ));
    }

    if rows.is_empty() {
        rows.push_str(concat!(
            "<div class=\"empty-state\">\n",
            "<h3>No Data Available</h3>\n",
            "<p>No leaderboard entries to show for this filter.</p>\n",
            "</div>\n",
        ));
    }

    rows
}

fn stat_tile(value: String, label: &str) -> String {
    format!(
        "<div class=\"stat\"><span class=\"stat-value\">{value}</span><span class=\"stat-label\">{label}</span></div>\n"
    )
}

pub fn format_change(change: i64) -> String {
    if change > 0 {
        format!("+{change}")
    } else {
        change.to_string()
    }
}

pub fn change_class(change: i64) -> &'static str {
    if change > 0 {
        "positive"
    } else if change < 0 {
        "negative"
    } else {
        "neutral"
    }
}

const PAGE_STYLE: &str = r#"
body { margin: 0 auto; max-width: 860px; padding: 16px; font-family: sans-serif; background: #f5f6f8; color: #222; }
header { display: flex; justify-content: space-between; align-items: center; gap: 12px; flex-wrap: wrap; }
.controls { display: flex; gap: 8px; }
button, select { padding: 6px 12px; font-size: 14px; }
.notice { margin: 12px 0; padding: 10px 14px; border-radius: 4px; }
.notice.warning { background: #fff3cd; color: #664d03; }
.notice.error { background: #f8d7da; color: #842029; }
.notice.loading { background: #cfe2ff; color: #084298; }
.stats { display: flex; gap: 12px; margin: 16px 0; }
.stat { flex: 1; background: #fff; border-radius: 6px; padding: 12px; text-align: center; }
.stat-value { display: block; font-size: 24px; font-weight: bold; }
.stat-label { font-size: 12px; color: #666; }
.leaderboard-entry { display: grid; grid-template-columns: 48px 1fr 90px 110px 70px; align-items: center; background: #fff; border-radius: 6px; padding: 10px 14px; margin-bottom: 6px; }
.rank { font-weight: bold; color: #888; }
.username { font-weight: bold; text-decoration: none; }
.user-details { font-size: 12px; color: #666; }
.rating { font-weight: bold; text-align: right; }
.contests { text-align: right; font-size: 13px; color: #555; }
.change { text-align: right; font-weight: bold; }
.change.positive { color: #1a7f37; }
.change.negative { color: #cf222e; }
.change.neutral { color: #888; }
.empty-state { background: #fff; border-radius: 6px; padding: 32px; text-align: center; color: #666; }
footer { margin-top: 16px; font-size: 12px; color: #888; text-align: center; }
.newbie { color: #808080; }
.pupil { color: #008000; }
.specialist { color: #03a89e; }
.expert { color: #0000ff; }
.candidate-master { color: #aa00aa; }
.master { color: #ff8c00; }
.international-master { color: #ff8c00; }
.grandmaster { color: #ff0000; }
.international-grandmaster { color: #ff0000; }
.legendary-grandmaster { color: #ff0000; }
"#;

const PAGE_SCRIPT: &str = r#"
const refreshBtn = document.getElementById('refreshBtn');
refreshBtn.addEventListener('click', async () => {
    refreshBtn.disabled = true;
    refreshBtn.textContent = 'Loading...';
    try {
        await fetch('/api/refresh', { method: 'POST' });
    } finally {
        window.location.reload();
    }
});
document.getElementById('ratingFilter').addEventListener('change', (e) => {
    const url = new URL(window.location);
    url.searchParams.set('band', e.target.value);
    window.location = url;
});
setTimeout(() => window.location.reload(), 60000);
"#;
