use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::{EdgeData, GraphElement};

/// Export elements as a graph document, in the same shape the store reads
pub fn export_json(elements: &[GraphElement], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, elements).context("Failed to write JSON")?;

    Ok(())
}

/// Export nodes and edges to two CSV files
pub fn export_csv(elements: &[GraphElement], nodes_path: &Path, edges_path: &Path) -> Result<()> {
    // Write nodes CSV
    let file = File::create(nodes_path)
        .with_context(|| format!("Failed to create file: {}", nodes_path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "id,kind,label,description,size,color")?;
    for element in elements {
        let (id, kind, label, description, size, color) = match element {
            GraphElement::Legislator { data, .. } => (
                data.id.clone(),
                "legislator",
                &data.label,
                &data.description,
                data.size,
                &data.color,
            ),
            GraphElement::Topic { data, .. } => (
                data.id.to_string(),
                "topic",
                &data.label,
                &data.description,
                data.size,
                &data.color,
            ),
            GraphElement::Edge { .. } => continue,
        };
        writeln!(
            writer,
            "\"{}\",{},\"{}\",\"{}\",{},\"{}\"",
            escape_csv(&id),
            kind,
            escape_csv(label),
            escape_csv(description),
            size,
            escape_csv(color)
        )?;
    }

    // Write edges CSV
    let file = File::create(edges_path)
        .with_context(|| format!("Failed to create file: {}", edges_path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "source,target,importance,weight,prob_conservative,sentiment,subjectivity,tweets"
    )?;
    for edge in edges(elements) {
        writeln!(
            writer,
            "\"{}\",{},{},{},{},{},{},{}",
            escape_csv(&edge.source),
            edge.target,
            edge.importance,
            edge.weight,
            edge.prob_conservative,
            edge.sentiment,
            edge.subjectivity,
            edge.tweets.len()
        )?;
    }

    Ok(())
}

/// Export to GraphML format
pub fn export_graphml(elements: &[GraphElement], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    // Write GraphML header
    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        writer,
        r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#
    )?;

    // Define attribute keys
    for (id, target, kind) in [
        ("label", "node", "string"),
        ("kind", "node", "string"),
        ("description", "node", "string"),
        ("importance", "edge", "double"),
        ("weight", "edge", "int"),
        ("prob_conservative", "edge", "double"),
        ("sentiment", "edge", "double"),
        ("subjectivity", "edge", "double"),
    ] {
        writeln!(
            writer,
            r#"  <key id="{0}" for="{1}" attr.name="{0}" attr.type="{2}"/>"#,
            id, target, kind
        )?;
    }

    writeln!(writer, r#"  <graph id="G" edgedefault="undirected">"#)?;

    for element in elements {
        let (id, kind, label, description) = match element {
            GraphElement::Legislator { data, .. } => {
                (data.id.clone(), "legislator", &data.label, &data.description)
            }
            GraphElement::Topic { data, .. } => {
                (data.id.to_string(), "topic", &data.label, &data.description)
            }
            GraphElement::Edge { .. } => continue,
        };
        writeln!(writer, r#"    <node id="{}">"#, escape_xml(&id))?;
        writeln!(writer, r#"      <data key="label">{}</data>"#, escape_xml(label))?;
        writeln!(writer, r#"      <data key="kind">{}</data>"#, kind)?;
        writeln!(
            writer,
            r#"      <data key="description">{}</data>"#,
            escape_xml(description)
        )?;
        writeln!(writer, r#"    </node>"#)?;
    }

    for (i, edge) in edges(elements).enumerate() {
        writeln!(
            writer,
            r#"    <edge id="e{}" source="{}" target="{}">"#,
            i,
            escape_xml(&edge.source),
            edge.target
        )?;
        writeln!(writer, r#"      <data key="importance">{}</data>"#, edge.importance)?;
        writeln!(writer, r#"      <data key="weight">{}</data>"#, edge.weight)?;
        writeln!(
            writer,
            r#"      <data key="prob_conservative">{}</data>"#,
            edge.prob_conservative
        )?;
        writeln!(writer, r#"      <data key="sentiment">{}</data>"#, edge.sentiment)?;
        writeln!(
            writer,
            r#"      <data key="subjectivity">{}</data>"#,
            edge.subjectivity
        )?;
        writeln!(writer, r#"    </edge>"#)?;
    }

    // Close graph and graphml
    writeln!(writer, r#"  </graph>"#)?;
    writeln!(writer, r#"</graphml>"#)?;

    Ok(())
}

fn edges(elements: &[GraphElement]) -> impl Iterator<Item = &EdgeData> {
    elements.iter().filter_map(|e| match e {
        GraphElement::Edge { data } => Some(data),
        _ => None,
    })
}

/// Escape special characters for CSV
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}

/// Escape special characters for XML
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::store::tests::FIXTURE;
    use crate::graph::Position;
    use crate::graph::model::{GraphDocument, NodeData};
    use tempfile::tempdir;

    fn sample() -> Vec<GraphElement> {
        let doc: GraphDocument = serde_json::from_str(FIXTURE).unwrap();
        doc.elements
    }

    // ── JSON ────────────────────────────────────────────────────────

    #[test]
    fn test_export_json_reloads_as_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.json");
        export_json(&sample(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: GraphDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.elements, sample());
    }

    #[test]
    fn test_export_json_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        export_json(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 0);
    }

    // ── CSV ─────────────────────────────────────────────────────────

    #[test]
    fn test_export_csv_header_and_rows() {
        let dir = tempdir().unwrap();
        let np = dir.path().join("nodes.csv");
        let ep = dir.path().join("edges.csv");
        export_csv(&sample(), &np, &ep).unwrap();

        let nodes_csv = std::fs::read_to_string(&np).unwrap();
        let lines: Vec<&str> = nodes_csv.lines().collect();
        assert_eq!(lines[0], "id,kind,label,description,size,color");
        assert_eq!(lines.len(), 7); // header + 6 nodes
        assert!(lines[4].starts_with("\"1\",topic,\"Healthcare\""));

        let edges_csv = std::fs::read_to_string(&ep).unwrap();
        let lines: Vec<&str> = edges_csv.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 edges
        assert_eq!(lines[1], "\"SenA\",1,0.1,12,0.73,-0.2,0.4,2");
    }

    #[test]
    fn test_export_csv_special_characters() {
        let elements = vec![GraphElement::Legislator {
            data: NodeData {
                id: "test\"node".into(),
                label: "A \"quoted\" label".into(),
                description: String::new(),
                size: 1.0,
                color: "#000".into(),
                group: None,
            },
            position: Position::default(),
        }];
        let dir = tempdir().unwrap();
        let np = dir.path().join("n.csv");
        let ep = dir.path().join("e.csv");
        export_csv(&elements, &np, &ep).unwrap();

        let content = std::fs::read_to_string(&np).unwrap();
        assert!(content.contains("\"\"quoted\"\"")); // CSV double-quote escaping
    }

    // ── GraphML ─────────────────────────────────────────────────────

    #[test]
    fn test_export_graphml_valid_xml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.graphml");
        export_graphml(&sample(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?xml"));
        assert!(content.contains("</graphml>"));
        assert!(content.contains("<node id=\"SenA\">"));
        assert!(content.contains("<edge id=\"e0\" source=\"SenA\" target=\"1\">"));
    }

    // ── Escape functions ────────────────────────────────────────────

    #[test]
    fn test_escape_xml_all_entities() {
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("\"hello\""), "&quot;hello&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }
}
