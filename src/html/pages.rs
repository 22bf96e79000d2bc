//! Server-rendered pages for browsing proofread articles

use crate::documents::{DocumentPage, LoadedDocument};
use crate::overlay::{decode_suggestions, escape, ClassNames};
use crate::pagination::PageLink;

/// Article list with page navigation
pub fn list_page(page: &DocumentPage, links: &[PageLink]) -> String {
    let items: String = page
        .ids
        .iter()
        .map(|id| format!("<li><a href=\"/articles/{id}\">Article {id}</a></li>\n"))
        .collect();

    let nav = links
        .iter()
        .map(|link| match link {
            PageLink::Page(n) if *n == page.page => {
                format!("<span class=\"current\">{n}</span>")
            }
            PageLink::Page(n) => format!(
                "<a href=\"/articles?page={}&amp;pageSize={}\">{}</a>",
                n, page.page_size, n
            ),
            PageLink::Ellipsis => "<span class=\"ellipsis\">...</span>".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    let body = format!(
        "<h1>Articles</h1>\n\
         <p class=\"summary\">{} articles, page {} of {} \
         (<a href=\"/articles/all\">show all</a>)</p>\n\
         <ul class=\"articles\">\n{}</ul>\n\
         <nav class=\"pages\">{}</nav>",
        page.total,
        page.page,
        page.total_pages.max(1),
        items,
        nav
    );

    layout("Articles", "", &body)
}

/// Article detail with the highlighted text and a table of results
pub fn detail_page(document: &LoadedDocument, highlighted: &str, classes: &ClassNames) -> String {
    let rows: String = document
        .results
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}-{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&r.category),
                escape(&r.text),
                r.start,
                r.end,
                escape(&decode_suggestions(&r.suggestion).join(", ")),
                escape(&r.message),
            )
        })
        .collect();

    let body = format!(
        "<p><a href=\"/articles\">Back to list</a></p>\n\
         <h1>Article {id}</h1>\n\
         <div class=\"content\">{highlighted}</div>\n\
         <h2>Results ({count})</h2>\n\
         <table class=\"results\">\n\
         <tr><th>Type</th><th>Text</th><th>Span</th><th>Suggestion</th><th>Message</th></tr>\n\
         {rows}</table>",
        id = document.article.article_id,
        count = document.results.len(),
    );

    let title = format!("Article {}", document.article.article_id);
    layout(&title, &overlay_css(classes), &body)
}

/// Every article's highlighted text on one page
///
/// `articles` pairs each document with its rendered overlay.
pub fn all_page(articles: &[(LoadedDocument, String)], classes: &ClassNames) -> String {
    let sections: String = articles
        .iter()
        .map(|(document, highlighted)| {
            format!(
                "<section class=\"article\">\n\
                 <h2><a href=\"/articles/{id}\">Article {id}</a> ({count} results)</h2>\n\
                 <div class=\"content\">{highlighted}</div>\n\
                 </section>\n",
                id = document.article.article_id,
                count = document.results.len(),
            )
        })
        .collect();

    let body = format!(
        "<p><a href=\"/articles\">Back to list</a></p>\n\
         <h1>All articles ({})</h1>\n{}",
        articles.len(),
        sections
    );

    layout("All articles", &overlay_css(classes), &body)
}

/// Styles for the overlay markup
fn overlay_css(classes: &ClassNames) -> String {
    format!(
        ".{hl} {{ background: #fff3a0; border-bottom: 2px solid #e0a800; position: relative; cursor: help; }}\n\
         .{tt} {{ display: none; position: absolute; left: 0; top: 1.6em; z-index: 10; min-width: 12em; \
         padding: 6px 8px; background: #333; color: #fff; border-radius: 4px; font-size: 0.85em; }}\n\
         .{hl}:hover > .{tt} {{ display: block; }}\n\
         .{content} {{ display: block; }}\n\
         .{suggestion} {{ color: #8fe388; font-weight: bold; }}\n\
         .{message} {{ color: #ddd; }}\n",
        hl = classes.highlight,
        tt = classes.tooltip,
        content = classes.tooltip_content,
        suggestion = classes.tooltip_suggestion,
        message = classes.tooltip_message,
    )
}

fn layout(title: &str, extra_css: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; max-width: 960px; margin: 2em auto; line-height: 1.8; }}\n\
         .content {{ white-space: pre-wrap; }}\n\
         table.results {{ border-collapse: collapse; width: 100%; }}\n\
         table.results td, table.results th {{ border: 1px solid #ccc; padding: 4px 8px; text-align: left; }}\n\
         nav.pages .current {{ font-weight: bold; }}\n\
         {}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        extra_css,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Article, ProofreadResult};

    fn document() -> LoadedDocument {
        LoadedDocument {
            article: Article {
                article_id: 9,
                content: "<p>The cat sat.</p>".to_string(),
            },
            results: vec![ProofreadResult {
                id: 1,
                article_id: Some(9),
                category: "grammar".to_string(),
                text: "cat".to_string(),
                start: 4,
                end: 7,
                suggestion: r#"["cats", "<dog>"]"#.to_string(),
                message: "subject-verb".to_string(),
                sentence: "The cat sat.".to_string(),
                created_at: 0,
            }],
            text: "The cat sat.".to_string(),
        }
    }

    #[test]
    fn test_detail_page_embeds_highlighted_verbatim() {
        let highlighted = r#"The <span class="highlight">cat</span> sat."#;
        let html = detail_page(&document(), highlighted, &ClassNames::default());

        assert!(html.contains(highlighted));
        assert!(html.contains("<td>cats, &lt;dog&gt;</td>"));
        assert!(html.contains("<td>4-7</td>"));
        assert!(html.contains(".highlight:hover > .tooltip"));
    }

    #[test]
    fn test_all_page_sections() {
        let highlighted = r#"The <span class="pr-highlight">cat</span> sat."#.to_string();
        let html = all_page(
            &[(document(), highlighted.clone())],
            &ClassNames::with_prefix("pr"),
        );

        assert!(html.contains("<h1>All articles (1)</h1>"));
        assert!(html.contains("<a href=\"/articles/9\">Article 9</a> (1 results)"));
        assert!(html.contains(&format!("<div class=\"content\">{highlighted}</div>")));
        assert!(html.contains(".pr-highlight:hover > .pr-tooltip"));
    }

    #[test]
    fn test_list_page_navigation() {
        let page = DocumentPage {
            ids: vec![11, 12],
            total: 12,
            page: 2,
            page_size: 2,
            total_pages: 6,
        };
        let links = crate::pagination::pagination_pages(2, 6);
        let html = list_page(&page, &links);

        assert!(html.contains("<a href=\"/articles/11\">Article 11</a>"));
        assert!(html.contains("<span class=\"current\">2</span>"));
        assert!(html.contains("<a href=\"/articles?page=3&amp;pageSize=2\">3</a>"));
    }
}
