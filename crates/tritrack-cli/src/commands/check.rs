use crate::support::load_engine_or_exit;
use serde_json::json;

pub fn run(config: String, json_output: bool) {
    let engine = load_engine_or_exit(&config);
    let cfg = engine.config();
    let graph = engine.graph();

    if json_output {
        let payload = json!({
            "config_path": config,
            "result": "accepted",
            "variables": cfg.catalog().len(),
            "requirements": cfg.requirements().len(),
            "aliases": cfg.alias_count(),
            "graph": {
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "acyclic": true,
            },
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("tritrack check {config}");
        println!("  Variables: {}", cfg.catalog().len());
        println!("  Requirement edges: {}", cfg.requirements().len());
        println!("  Aliases: {}", cfg.alias_count());
        println!(
            "  Graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        println!("  Acyclic: yes");
    }
}
