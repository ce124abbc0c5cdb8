//! The tree-walking Swing emitter.

use swinggen_core::{Forest, Node, NodeId};

use crate::properties::{emit_property, PropKey};

/// Statement indent inside the `invokeLater` block. Generated statements
/// sit at a fixed depth regardless of widget nesting.
const STMT_INDENT: &str = "\t\t\t\t";

const COLUMNS_KEY: &str = "COLUMNS";
const DEFAULT_COLUMNS: &str = "20";

/// Widget kinds with construction rules. Tags outside this set contribute
/// no output; their subtree is dropped with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Frame,
    Panel,
    Button,
    Label,
    TextField,
    MenuBar,
    Menu,
    MenuItem,
    DesktopPane,
    InternalFrame,
    Comment,
}

impl NodeKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "FRAME" => Some(Self::Frame),
            "PANEL" => Some(Self::Panel),
            "BUTTON" => Some(Self::Button),
            "LABEL" => Some(Self::Label),
            "TEXTFIELD" => Some(Self::TextField),
            "MENUBAR" => Some(Self::MenuBar),
            "MENU" => Some(Self::Menu),
            "MENUITEM" => Some(Self::MenuItem),
            "DESKTOPPANE" => Some(Self::DesktopPane),
            "INTERNALFRAME" => Some(Self::InternalFrame),
            "COMMENT" => Some(Self::Comment),
            _ => None,
        }
    }
}

/// Generate the complete Java source for a parsed forest.
///
/// Deterministic: the synthesized-name sequence restarts on every call, so
/// identical forests produce byte-identical output.
pub fn generate(forest: &Forest, class_name: &str) -> String {
    let mut emitter = Emitter {
        forest,
        out: String::new(),
        var_seq: 0,
        active_frame: None,
    };
    emitter.header(class_name);
    for &root in forest.roots() {
        emitter.node(root, None);
    }
    emitter.footer();
    emitter.out
}

/// Generation context threaded through one emission pass.
struct Emitter<'a> {
    forest: &'a Forest,
    out: String,
    /// Sequence for synthesized identifiers. Advances only when a node has
    /// no explicit name.
    var_seq: usize,
    /// Most recently constructed top-level frame. Menus and menu bars
    /// attach here rather than to their lexical parent.
    active_frame: Option<String>,
}

impl<'a> Emitter<'a> {
    fn header(&mut self, class_name: &str) {
        self.out.push_str("import javax.swing.*;\n");
        self.out.push_str("import java.awt.*;\n");
        self.out.push_str(&format!("public class {class_name} {{\n"));
        self.out.push_str("\tpublic static void main(String[] args) {\n");
        self.out.push_str("\t\tSwingUtilities.invokeLater(() -> {\n");
    }

    fn footer(&mut self) {
        self.out.push_str("\t\t});\n");
        self.out.push_str("\t}\n");
        self.out.push('\n');
        self.out.push_str("\tprivate static class CommandBus {\n");
        self.out.push_str("\t\tpublic static void execute(String command) {\n");
        self.out.push_str("\t\t\tSystem.out.println(command);\n");
        self.out.push_str("\t\t}\n");
        self.out.push_str("\t}\n");
        self.out.push_str("}\n");
    }

    fn stmt(&mut self, statement: &str) {
        self.out.push_str(STMT_INDENT);
        self.out.push_str(statement);
        self.out.push('\n');
    }

    /// Resolve a node's variable identifier: the explicit-name property
    /// recorded under its own tag when present, otherwise a synthesized
    /// `<kind>_<seq>` name.
    fn var_name(&mut self, node: &Node) -> String {
        if let Some(name) = node.property(&node.tag) {
            return name.to_string();
        }
        let name = format!("{}_{}", node.tag.to_lowercase(), self.var_seq);
        self.var_seq += 1;
        name
    }

    fn construct(&mut self, var: &str, class: &str) {
        self.stmt(&format!("{class} {var} = new {class}();"));
    }

    fn attach(&mut self, parent: Option<&str>, var: &str) {
        if let Some(parent) = parent {
            self.stmt(&format!("{parent}.add({var});"));
        }
    }

    /// Replay the node's properties in declaration order. Keys without a
    /// table entry are ignored without diagnostic.
    fn apply_properties(&mut self, node: &Node, var: &str) {
        for (key, value) in &node.properties {
            if let Some(key) = PropKey::from_key(key) {
                emit_property(&mut self.out, STMT_INDENT, var, key, value.as_deref());
            }
        }
    }

    fn children(&mut self, node: &'a Node, parent: Option<&str>) {
        for &child in &node.children {
            self.node(child, parent);
        }
    }

    fn node(&mut self, id: NodeId, parent: Option<&str>) {
        let forest = self.forest;
        let Some(node) = forest.get(id) else {
            return;
        };

        // Identifier resolution happens before kind dispatch, so an unnamed
        // node of an unknown kind still consumes a sequence number.
        let var = self.var_name(node);

        let Some(kind) = NodeKind::from_tag(&node.tag) else {
            log::warn!(
                "unknown widget kind {} on line {}; subtree skipped",
                node.tag,
                node.line
            );
            return;
        };

        match kind {
            NodeKind::Frame => {
                self.construct(&var, "JFrame");
                self.stmt(&format!(
                    "{var}.setDefaultCloseOperation(JFrame.EXIT_ON_CLOSE);"
                ));
                self.active_frame = Some(var.clone());
                self.apply_properties(node, &var);
                let content = format!("{var}.getContentPane()");
                self.children(node, Some(&content));
                self.stmt(&format!("{var}.setVisible(true);"));
            }
            NodeKind::Panel => {
                self.construct(&var, "JPanel");
                self.apply_properties(node, &var);
                // Panels attach before their children are emitted.
                self.attach(parent, &var);
                self.children(node, Some(&var));
            }
            NodeKind::Button => {
                self.construct(&var, "JButton");
                self.apply_properties(node, &var);
                self.children(node, Some(&var));
                self.attach(parent, &var);
            }
            NodeKind::Label => {
                self.construct(&var, "JLabel");
                self.apply_properties(node, &var);
                self.children(node, Some(&var));
                self.attach(parent, &var);
            }
            NodeKind::TextField => {
                self.construct(&var, "JTextField");
                self.apply_properties(node, &var);
                // Default size-in-columns lands after the declared
                // properties, where a late declaration would have put it.
                if !node.has_property(COLUMNS_KEY) {
                    emit_property(
                        &mut self.out,
                        STMT_INDENT,
                        &var,
                        PropKey::Columns,
                        Some(DEFAULT_COLUMNS),
                    );
                }
                self.children(node, Some(&var));
                self.attach(parent, &var);
            }
            NodeKind::MenuBar => {
                self.construct(&var, "JMenuBar");
                self.apply_properties(node, &var);
                self.children(node, Some(&var));
                if let Some(frame) = self.active_frame.clone() {
                    self.stmt(&format!("{frame}.setJMenuBar({var});"));
                }
            }
            NodeKind::Menu => {
                self.construct(&var, "JMenu");
                self.apply_properties(node, &var);
                self.children(node, Some(&var));
                if let Some(frame) = self.active_frame.clone() {
                    self.stmt(&format!("{frame}.add({var});"));
                }
            }
            NodeKind::MenuItem => {
                self.construct(&var, "JMenuItem");
                self.apply_properties(node, &var);
                self.children(node, Some(&var));
                self.attach(parent, &var);
            }
            NodeKind::DesktopPane => {
                self.construct(&var, "JDesktopPane");
                self.apply_properties(node, &var);
                self.children(node, Some(&var));
                self.attach(parent, &var);
            }
            NodeKind::InternalFrame => {
                self.construct(&var, "JInternalFrame");
                self.apply_properties(node, &var);
                self.stmt(&format!("{var}.setVisible(true);"));
                self.children(node, Some(&var));
                self.attach(parent, &var);
            }
            NodeKind::Comment => {
                // No constructor; the COMMENT property replays the literal
                // line, then any children are visited.
                self.apply_properties(node, &var);
                self.children(node, Some(&var));
            }
        }
    }
}
