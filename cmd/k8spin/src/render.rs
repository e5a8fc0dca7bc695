use pkg_types::namespace::Namespace;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct NamespaceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "Expiration")]
    expiration: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Namespace> for NamespaceRow {
    fn from(ns: &Namespace) -> Self {
        Self {
            name: ns.namespace_name.clone(),
            namespace: ns.namespace.clone(),
            expiration: ns.expiration.clone(),
            status: ns.status.clone(),
        }
    }
}

/// Render namespaces as an aligned table, rows in the order received.
pub fn namespace_table(namespaces: &[Namespace]) -> String {
    let mut table = Table::new(namespaces.iter().map(NamespaceRow::from));
    table.with(Style::ascii());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(line: &str) -> Vec<&str> {
        line.split('|').map(str::trim).filter(|c| !c.is_empty()).collect()
    }

    fn ns(id: &str, name: &str) -> Namespace {
        Namespace {
            namespace: id.into(),
            namespace_name: name.into(),
            ingress_whitelist: vec!["203.0.113.7".into()],
            expiration: "2024-01-01".into(),
            resource_quotas: "cpu=100m".into(),
            status: "ready".into(),
        }
    }

    #[test]
    fn renders_header_and_row() {
        let list = Namespace::parse_list(
            r#"[{"namespace":"ns1","namespace_name":"Foo","expiration":"2024-01-01","status":"ready"}]"#,
        )
        .unwrap();
        let out = namespace_table(&list);

        let header = out.lines().find(|l| l.contains("Name")).unwrap();
        assert_eq!(cells(header), vec!["Name", "Namespace", "Expiration", "Status"]);
        let row = out.lines().find(|l| l.contains("Foo")).unwrap();
        assert_eq!(cells(row), vec!["Foo", "ns1", "2024-01-01", "ready"]);
    }

    #[test]
    fn keeps_server_order() {
        let out = namespace_table(&[ns("z-ns", "Zeta"), ns("a-ns", "Alpha"), ns("m-ns", "Mid")]);
        let names: Vec<&str> = out
            .lines()
            .map(cells)
            .filter(|c| c.len() == 4 && c[0] != "Name")
            .map(|c| c[0])
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn unmapped_fields_are_not_shown() {
        let out = namespace_table(&[ns("ns1", "Foo")]);
        assert!(!out.contains("203.0.113.7"));
        assert!(!out.contains("cpu=100m"));
    }

    #[test]
    fn empty_list_renders_header_only() {
        let out = namespace_table(&[]);
        assert!(out.contains("Expiration"));
        assert!(!out.contains("ready"));
    }
}
