use log::error;
use xmltree::{Element, XMLNode};

use crate::error::PlexError;

/// `context` names where the body came from and ends up in the error log.
pub fn parse_document(body: &str, context: &str) -> Result<Element, PlexError> {
    Element::parse(body.as_bytes()).map_err(|source| {
        error!("Error parsing XML response from {}: {}", context, source);
        PlexError::Parse {
            context: context.to_string(),
            source,
        }
    })
}

/// Document order. `root` itself is not included.
pub fn descendants<'a>(root: &'a Element, name: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect(root, name, &mut found);
    found
}

fn collect<'a>(parent: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    for child in parent.children.iter().filter_map(XMLNode::as_element) {
        if child.name == name {
            found.push(child);
        }
        collect(child, name, found);
    }
}

pub fn first_descendant<'a>(root: &'a Element, name: &str) -> Option<&'a Element> {
    for child in root.children.iter().filter_map(XMLNode::as_element) {
        if child.name == name {
            return Some(child);
        }
        if let Some(found) = first_descendant(child, name) {
            return Some(found);
        }
    }
    None
}

pub fn safe_get(element: Option<&Element>, attribute: &str) -> Option<String> {
    element.and_then(|e| e.attributes.get(attribute).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<MediaContainer size="2">
        <Playlist ratingKey="1" title="One"/>
        <Hub>
            <Playlist ratingKey="2" title="Two">
                <Playlist ratingKey="3" title="Nested"/>
            </Playlist>
        </Hub>
    </MediaContainer>"#;

    #[test]
    fn finds_descendants_in_document_order() {
        let root = parse_document(DOC, "/playlists").unwrap();
        let keys: Vec<_> = descendants(&root, "Playlist")
            .into_iter()
            .map(|p| p.attributes["ratingKey"].clone())
            .collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }

    #[test]
    fn root_is_not_its_own_descendant() {
        let root = parse_document(DOC, "/playlists").unwrap();
        assert!(descendants(&root, "MediaContainer").is_empty());
        assert!(first_descendant(&root, "MediaContainer").is_none());
    }

    #[test]
    fn first_descendant_searches_depth_first() {
        let root = parse_document(DOC, "/playlists").unwrap();
        let hub = first_descendant(&root, "Hub").unwrap();
        let nested = first_descendant(hub, "Playlist").unwrap();
        assert_eq!(nested.attributes["title"], "Two");
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let err = parse_document("<MediaContainer><Playlist></MediaContainer>", "/playlists").unwrap_err();
        match err {
            PlexError::Parse { context, .. } => assert_eq!(context, "/playlists"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn safe_get_handles_missing_element_and_attribute() {
        let root = parse_document(DOC, "/playlists").unwrap();
        assert_eq!(safe_get(Some(&root), "size"), Some("2".to_string()));
        assert_eq!(safe_get(Some(&root), "title"), None);
        assert_eq!(safe_get(None, "size"), None);
    }
}
