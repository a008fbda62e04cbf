use super::{GraphError, GraphModel};

impl GraphModel {
    /// 生成 Graphviz DOT 格式的图描述字符串
    ///
    /// 每个分层行输出为一个`rank=same`分组，使 Graphviz 的布局与`assign_rows`一致；
    /// 边按各节点连接的声明顺序输出。节点填充色取自层类型。
    pub fn to_dot(&self) -> Result<String, GraphError> {
        let rows = self.assign_node_rows()?;
        let mut dot = String::new();

        dot.push_str("digraph Model {\n");
        dot.push_str("    rankdir=TB;\n"); // 从上到下
        dot.push_str("    node [shape=box, style=\"rounded,filled\", fontname=\"Arial\"];\n");
        dot.push('\n');

        for node in rows.iter().flatten() {
            let record = node.record();
            let [r, g, b] = record.kind.color();
            dot.push_str(&format!(
                "    n{} [label=\"{}\\n{} → {}\\nparams: {}\", fillcolor=\"#{:02x}{:02x}{:02x}\"];\n",
                node.id().0,
                escape_label(&record.kind.as_str().to_uppercase()),
                record.input_shape,
                record.output_shape,
                record.parameters,
                r,
                g,
                b
            ));
        }
        dot.push('\n');

        for row in &rows {
            let members: Vec<String> = row.iter().map(|node| format!("n{}", node.id().0)).collect();
            dot.push_str(&format!("    {{ rank=same; {}; }}\n", members.join("; ")));
        }
        dot.push('\n');

        for node in rows.iter().flatten() {
            for target in node.connections() {
                dot.push_str(&format!("    n{} -> n{};\n", node.id().0, target.0));
            }
        }

        dot.push_str("}\n");
        Ok(dot)
    }
}

/// 转义 DOT 双引号字符串中的反斜杠与双引号
fn escape_label(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '"') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
