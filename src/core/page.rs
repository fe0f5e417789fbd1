// src/core/page.rs
//! Minimal read-only view of a parsed page.
//!
//! Extraction code only ever needs four things from markup: find elements by
//! tag + class, read an element's text, read an attribute, and walk child
//! elements. `StatPage`/`PageNode` capture exactly that, so specs can be tested
//! against any backing document. `HtmlStatPage` is the real one, on `scraper`.

use scraper::{ElementRef, Html, Selector};

use crate::model::PageId;

pub trait PageNode: Sized {
    /// Concatenated text of the node and all descendants.
    fn text(&self) -> String;
    fn attr(&self, name: &str) -> Option<&str>;
    /// Child elements, in document order (text nodes are not included).
    fn children(&self) -> Vec<Self>;
    /// Text of the first child node with content: a non-blank text node or an
    /// element. Blank text nodes (markup indentation) are skipped.
    fn first_child_text(&self) -> Option<String>;
}

pub trait StatPage {
    type Node<'a>: PageNode
    where
        Self: 'a;

    fn id(&self) -> &PageId;

    /// All `tag` elements whose class list contains every class in `classes`
    /// (whitespace separated), in document order.
    fn find_all<'a>(&'a self, tag: &str, classes: &str) -> Vec<Self::Node<'a>>;
}

/// A fetched page parsed with `scraper`.
pub struct HtmlStatPage {
    id: PageId,
    doc: Html,
}

impl HtmlStatPage {
    pub fn parse(id: PageId, html: &str) -> Self {
        Self { id, doc: Html::parse_document(html) }
    }
}

impl StatPage for HtmlStatPage {
    type Node<'a> = ElementRef<'a>;

    fn id(&self) -> &PageId {
        &self.id
    }

    fn find_all<'a>(&'a self, tag: &str, classes: &str) -> Vec<ElementRef<'a>> {
        // A bare tag name always parses; anything else matches nothing.
        let Ok(selector) = Selector::parse(tag) else {
            return Vec::new();
        };
        let wanted: Vec<&str> = classes.split_whitespace().collect();
        self.doc
            .select(&selector)
            .filter(|el| {
                let have: Vec<&str> = el.value().classes().collect();
                wanted.iter().all(|c| have.contains(c))
            })
            .collect()
    }
}

impl<'a> PageNode for ElementRef<'a> {
    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn children(&self) -> Vec<Self> {
        (**self).children().filter_map(ElementRef::wrap).collect()
    }

    fn first_child_text(&self) -> Option<String> {
        for child in (**self).children() {
            if let Some(text) = child.value().as_text() {
                if text.text.trim().is_empty() {
                    continue;
                }
                return Some(s!(&*text.text));
            }
            if let Some(el) = ElementRef::wrap(child) {
                return Some(el.text().collect());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatKind;

    fn page(html: &str) -> HtmlStatPage {
        let id = PageId { league: 1, season: 2015, fantasy_team: 7, kind: StatKind::Hitting };
        HtmlStatPage::parse(id, html)
    }

    #[test]
    fn find_all_requires_every_class() {
        let p = page(
            r#"<table>
                <tr class="a b"><td>1</td></tr>
                <tr class="b"><td>2</td></tr>
                <tr class="b a c"><td>3</td></tr>
            </table>"#,
        );
        let rows = p.find_all("tr", "a b");
        let texts: Vec<String> = rows.iter().map(|r| PageNode::text(r)).collect();
        assert_eq!(texts, vec!["1", "3"]);
        assert_eq!(p.find_all("tr", "b").len(), 3);
    }

    #[test]
    fn nbsp_entity_becomes_u00a0() {
        let p = page(r#"<table><tr class="r"><td>NYY&nbsp;SS</td></tr></table>"#);
        let row = &p.find_all("tr", "r")[0];
        assert_eq!(PageNode::text(row), "NYY\u{a0}SS");
    }

    #[test]
    fn children_skip_text_nodes() {
        let p = page("<table><tr class=\"r\">\n  <td>a</td>\n  <td>b</td>\n</tr></table>");
        let row = &p.find_all("tr", "r")[0];
        assert_eq!(PageNode::children(row).len(), 2);
    }

    #[test]
    fn first_child_text_reads_text_or_element() {
        let p = page(
            r#"<table><tr class="r"><td><span>AB</span>x</td><td>R<b>!</b></td></tr></table>"#,
        );
        let cells = PageNode::children(&p.find_all("tr", "r")[0]);
        assert_eq!(cells[0].first_child_text().as_deref(), Some("AB"));
        assert_eq!(cells[1].first_child_text().as_deref(), Some("R"));
    }

    #[test]
    fn first_child_text_skips_indentation() {
        let p = page("<table><tr class=\"r\"><td>\n   <a>AB</a>\n</td><td> </td></tr></table>");
        let cells = PageNode::children(&p.find_all("tr", "r")[0]);
        assert_eq!(cells[0].first_child_text().as_deref(), Some("AB"));
        assert_eq!(cells[1].first_child_text(), None);
    }

    #[test]
    fn attr_reads_raw_value() {
        let p = page(r#"<table><tr class="r" id="plyr123"><td>x</td></tr></table>"#);
        let row = &p.find_all("tr", "r")[0];
        assert_eq!(PageNode::attr(row, "id"), Some("plyr123"));
        assert_eq!(PageNode::attr(row, "nope"), None);
    }
}
