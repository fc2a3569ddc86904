use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::dom;

/// One discovered blog entry, parsed out of its static HTML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogEntry {
    pub title: String,
    /// ISO date (`YYYY-MM-DD`); entries sort newest first by string order.
    pub date: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub url: String,
}

/// Marker the entry file must carry to count as a real entry and not a
/// host's fallback page served with a 200.
const ENTRY_MARKER: &str = "entry-container";
/// Highest entry number the probe will try.
#[cfg(target_arch = "wasm32")]
const MAX_ENTRIES: u32 = 100;
/// Consecutive misses after which the probe gives up. Entries are allowed
/// small numbering gaps from deletions.
#[cfg(target_arch = "wasm32")]
const MISS_LIMIT: u32 = 5;

/// Pull a `name="value"` attribute value out of raw HTML. Entries are
/// written by hand with double-quoted attributes, so this stays a string
/// scan rather than a parser.
fn extract_attr(html: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=\"");
    let start = html.find(&needle)? + needle.len();
    let end = html[start..].find('"')? + start;
    Some(html[start..end].to_string())
}

/// Parse one fetched entry file, or `None` when it lacks the marker or the
/// required metadata.
fn parse_entry(html: &str, url: &str) -> Option<BlogEntry> {
    if !html.contains(ENTRY_MARKER) {
        return None;
    }
    let title = extract_attr(html, "data-title")?;
    let date = extract_attr(html, "data-date")?;
    let excerpt = extract_attr(html, "data-excerpt").unwrap_or_default();
    let tags = extract_attr(html, "data-tags")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default();
    Some(BlogEntry {
        title,
        date,
        excerpt,
        tags,
        url: url.to_string(),
    })
}

/// The blog index. Entries are standalone HTML files discovered by probing
/// sequential URLs; no manifest to keep in sync.
#[function_component(Blog)]
pub fn blog() -> Html {
    let entries: UseStateHandle<Option<Vec<BlogEntry>>> = use_state(|| None);

    {
        let entries = entries.clone();
        use_effect_with((), move |()| {
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                let mut found = Vec::new();
                let mut misses = 0;
                for n in 1..=MAX_ENTRIES {
                    let url = dom::asset_path(&format!("blog/entries/entry{n}.html"));
                    let entry = match dom::fetch_text(&url).await {
                        Some(body) => parse_entry(&body, &url),
                        None => None,
                    };
                    match entry {
                        Some(entry) => {
                            misses = 0;
                            found.push(entry);
                        }
                        None => {
                            misses += 1;
                            if misses >= MISS_LIMIT {
                                break;
                            }
                        }
                    }
                }
                found.sort_by(|a, b| b.date.cmp(&a.date));
                entries.set(Some(found));
            });
            #[cfg(not(target_arch = "wasm32"))]
            entries.set(Some(Vec::new()));
            || {}
        });
    }

    let body = match entries.as_ref() {
        None => html! { <p class="blog-status">{ "Checking the logbook..." }</p> },
        Some(list) if list.is_empty() => {
            html! { <p class="blog-status">{ "No trip reports yet. The season is young." }</p> }
        }
        Some(list) => html! {
            <div class="blog-entries">
                { for list.iter().map(|entry| html! {
                    <article class="blog-entry" key={entry.url.clone()}>
                        <h2><a href={entry.url.clone()}>{ &entry.title }</a></h2>
                        <p class="blog-date">{ &entry.date }</p>
                        <p class="blog-excerpt">{ &entry.excerpt }</p>
                        <ul class="blog-tags">
                            { for entry.tags.iter().map(|tag| html! {
                                <li class="blog-tag" key={tag.clone()}>{ tag }</li>
                            }) }
                        </ul>
                    </article>
                }) }
            </div>
        },
    };

    html! {
        <div class="blog-page">
            <h1>{ "Trip Reports" }</h1>
            { body }
        </div>
    }
}
