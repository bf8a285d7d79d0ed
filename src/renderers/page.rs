//! Static page markup emission.
//!
//! Pure string builders over the document model. All path logic lives in the
//! link engine: every emitted href goes through the OfficeUriResolver, and
//! nothing here mutates the document.

use crate::links::OfficeUriResolver;
use crate::renderers::escape::escape_html;
use crate::types::{BoardDocument, Item, Section, SectionContent, Subsection, Tab};

const STYLE: &str = "\
body{font-family:'Meiryo','Yu Gothic',sans-serif;max-width:1200px;margin:0 auto;\
padding:20px;background-color:#f5f5f5}\
.header{background-color:#2c3e50;color:white;padding:20px;border-radius:8px;margin-bottom:20px}\
.header h1{margin:0}\
.nav{margin-bottom:20px}\
.nav a{display:inline-block;padding:10px 20px;background-color:#3498db;color:white;\
text-decoration:none;border-radius:5px;margin-right:10px}\
.section{background:white;padding:20px;border-radius:8px;margin-bottom:20px;\
box-shadow:0 2px 4px rgba(0,0,0,0.1)}\
.section h2{margin-top:0;color:#2c3e50;border-bottom:2px solid #3498db;padding-bottom:10px}\
.subsection{margin-bottom:25px;padding:15px;background-color:#f9f9f9;\
border-left:4px solid #3498db;border-radius:4px}\
.subsection h3{margin-top:0;color:#2c3e50}\
table{width:100%;border-collapse:collapse;margin-top:15px}\
th,td{padding:12px;text-align:left;border-bottom:1px solid #ddd}\
th{background-color:#3498db;color:white}\
ul{list-style-type:none;padding-left:0}\
ul li{padding:8px 0;border-bottom:1px solid #eee}\
.cards{display:grid;grid-template-columns:repeat(auto-fit,minmax(300px,1fr));gap:20px}\
.card{background:white;padding:30px;border-radius:8px;box-shadow:0 2px 4px rgba(0,0,0,0.1);\
text-align:center}\
.card a{text-decoration:none;color:#2c3e50;display:block}\
.card h2{margin:0 0 10px 0;color:#3498db}";

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"ja\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n{body}</body>\n\
         </html>\n",
        escape_html(title)
    )
}

/// Landing page: one card per tab.
pub fn render_index_page(doc: &BoardDocument) -> String {
    let mut body = String::new();
    body.push_str("<div class=\"header\"><h1>掲示板</h1></div>\n");
    body.push_str("<div class=\"cards\">\n");
    for (href, tab) in [("all_staff.html", &doc.all_staff), ("staff.html", &doc.staff)] {
        body.push_str(&format!(
            "<div class=\"card\"><a href=\"{href}\"><h2>{}</h2></a></div>\n",
            escape_html(&tab.title)
        ));
    }
    body.push_str("</div>\n");
    page_shell("掲示板 - トップページ", &body)
}

/// One tab page: header, cross navigation, then every section.
pub fn render_tab_page(
    tab: &Tab,
    nav: &[(&str, &str)],
    resolver: &OfficeUriResolver,
    base_root: &str,
) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        "<div class=\"header\"><h1>{}</h1></div>\n",
        escape_html(&tab.title)
    ));

    body.push_str("<div class=\"nav\">\n");
    for (href, label) in nav {
        body.push_str(&format!(
            "<a href=\"{href}\">{}</a>\n",
            escape_html(label)
        ));
    }
    body.push_str("</div>\n");

    for section in &tab.sections {
        body.push_str(&render_section(section, resolver, base_root));
    }

    page_shell(&tab.title, &body)
}

fn render_section(section: &Section, resolver: &OfficeUriResolver, base_root: &str) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"section\">\n");
    out.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.name)));

    match &section.content {
        SectionContent::Items { items } => {
            if section.name == "INFORMATION" {
                out.push_str(&render_information_table(items, resolver, base_root));
            } else {
                out.push_str(&render_item_list(items, resolver, base_root));
            }
        }
        SectionContent::Subsections { subsections } => {
            for sub in subsections {
                out.push_str(&render_subsection(sub, resolver, base_root));
            }
        }
    }

    out.push_str("</div>\n");
    out
}

fn render_subsection(sub: &Subsection, resolver: &OfficeUriResolver, base_root: &str) -> String {
    format!(
        "<div class=\"subsection\">\n<h3>{}</h3>\n{}</div>\n",
        escape_html(&sub.name),
        render_item_list(&sub.items, resolver, base_root)
    )
}

/// INFORMATION sections render as a date/content/detail table; a linked
/// detail cell becomes an anchor.
fn render_information_table(
    items: &[Item],
    resolver: &OfficeUriResolver,
    base_root: &str,
) -> String {
    let mut out = String::new();
    out.push_str(
        "<table>\n<thead>\n<tr><th>発信日</th><th>内容</th><th>詳細内容</th></tr>\n\
         </thead>\n<tbody>\n",
    );
    for item in items {
        if let Item::Info {
            date,
            content,
            detail,
            link,
        } = item
        {
            let detail_cell = match link {
                Some(link) if !link.is_empty() => anchor(link, detail, resolver, base_root),
                _ => escape_html(detail),
            };
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{detail_cell}</td></tr>\n",
                escape_html(date),
                escape_html(content),
            ));
        }
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn render_item_list(items: &[Item], resolver: &OfficeUriResolver, base_root: &str) -> String {
    let mut out = String::new();
    out.push_str("<ul>\n");
    for item in items {
        let rendered = match item {
            Item::Text { text } => escape_html(text),
            Item::Linked { text, link } => anchor(link, text, resolver, base_root),
            Item::Info {
                detail, link: Some(link), ..
            } if !link.is_empty() => anchor(link, detail, resolver, base_root),
            Item::Info { detail, .. } => escape_html(detail),
        };
        out.push_str(&format!("<li>{rendered}</li>\n"));
    }
    out.push_str("</ul>\n");
    out
}

fn anchor(link: &str, label: &str, resolver: &OfficeUriResolver, base_root: &str) -> String {
    let href = resolver.resolve(link, base_root);
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_html(&href),
        escape_html(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Section, SectionContent, Tab};

    fn tab_with(section: Section) -> Tab {
        Tab {
            title: "職員向け".into(),
            sections: vec![section],
        }
    }

    #[test]
    fn information_section_renders_as_table_with_resolved_link() {
        let tab = tab_with(Section {
            name: "INFORMATION".into(),
            content: SectionContent::Items {
                items: vec![Item::Info {
                    date: "11/10".into(),
                    content: "予算".into(),
                    detail: "予算表".into(),
                    link: Some("reports/budget.xlsx".into()),
                }],
            },
        });
        let html = render_tab_page(&tab, &[], &OfficeUriResolver::new(), "H:/nev_window/");
        assert!(html.contains("<table>"));
        assert!(html.contains("ms-excel:ofv|u|H:\\nev_window\\reports\\budget.xlsx"));
        assert!(html.contains("<td>11/10</td>"));
    }

    #[test]
    fn plain_sections_render_as_lists_and_escape_text() {
        let tab = tab_with(Section {
            name: "共通コーナー".into(),
            content: SectionContent::Items {
                items: vec![Item::Text {
                    text: "a < b & c".into(),
                }],
            },
        });
        let html = render_tab_page(&tab, &[], &OfficeUriResolver::new(), "H:/");
        assert!(html.contains("<li>a &lt; b &amp; c</li>"));
    }

    #[test]
    fn non_office_links_keep_the_relative_href() {
        let tab = tab_with(Section {
            name: "共通コーナー".into(),
            content: SectionContent::Items {
                items: vec![Item::Linked {
                    text: "組織図".into(),
                    link: "共通コーナー/NEV 組織.pdf".into(),
                }],
            },
        });
        let html = render_tab_page(&tab, &[], &OfficeUriResolver::new(), "H:/nev_window/");
        assert!(html.contains("href=\"共通コーナー/NEV 組織.pdf\""));
    }

    #[test]
    fn subsections_render_nested_blocks() {
        let tab = tab_with(Section {
            name: "標準書コーナー".into(),
            content: SectionContent::Subsections {
                subsections: vec![Subsection {
                    name: "基本規則".into(),
                    items: vec![Item::Text { text: "規則1".into() }],
                }],
            },
        });
        let html = render_tab_page(&tab, &[], &OfficeUriResolver::new(), "H:/");
        assert!(html.contains("<h3>基本規則</h3>"));
        assert!(html.contains("<li>規則1</li>"));
    }

    #[test]
    fn index_page_links_both_tab_pages() {
        let doc = BoardDocument {
            all_staff: Tab {
                title: "全員向け".into(),
                sections: vec![],
            },
            staff: Tab {
                title: "職員向け".into(),
                sections: vec![],
            },
        };
        let html = render_index_page(&doc);
        assert!(html.contains("href=\"all_staff.html\""));
        assert!(html.contains("href=\"staff.html\""));
    }
}
