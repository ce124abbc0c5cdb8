//! End-to-end pipeline tests: description text in, Java source out.

use swinggen_codegen::generate;
use swinggen_parser::parse;

const DEMO: &str = "\
// demo window
Begin Frame
    Title \"Demo\"
    Bounds 100, 100, 400, 300
    Layout border
    Begin MenuBar
        Begin Menu fileMenu
            Text \"File\"
            Begin MenuItem
                Text \"Open\"
                Action \"file.open\"
            End MenuItem
        End Menu
    End MenuBar
    Begin Panel
        Layout flow
        Begin Label
            Text \"Name:\"
        End Label
        Begin TextField
        End TextField
        Begin Button
            Text \"Save\"
            Action \"file.save\"
        End Button
    End Panel
    Pack
End Frame
";

#[test]
fn demo_program_has_the_expected_shape() {
    let forest = parse(DEMO).unwrap();
    let code = generate(&forest, "Demo");

    // One class wrapping one invokeLater block and the command bus.
    assert!(code.starts_with("import javax.swing.*;\nimport java.awt.*;\npublic class Demo {\n"));
    assert!(code.contains("SwingUtilities.invokeLater(() -> {"));
    assert!(code.ends_with("}\n"));
    assert!(code.contains("private static class CommandBus"));

    // The top-level comment survives as a literal line.
    assert!(code.contains("// demo window"));

    // Frame chrome.
    assert!(code.contains("JFrame frame_0 = new JFrame();"));
    assert!(code.contains("frame_0.setDefaultCloseOperation(JFrame.EXIT_ON_CLOSE);"));
    assert!(code.contains("frame_0.setTitle(\"Demo\");"));
    assert!(code.contains("frame_0.setBounds(100, 100, 400, 300);"));
    assert!(code.contains("frame_0.setLayout(new BorderLayout());"));
    assert!(code.contains("frame_0.pack();"));
    assert!(code.contains("frame_0.setVisible(true);"));

    // Menus attach to the frame, items to their menu.
    assert!(code.contains("frame_0.setJMenuBar(menubar_1);"));
    assert!(code.contains("frame_0.add(fileMenu);"));
    assert!(code.contains("fileMenu.add(menuitem_2);"));
    assert!(code.contains("menuitem_2.addActionListener(e -> CommandBus.execute(\"file.open\"));"));

    // The panel subtree, with the synthesized-name sequence continuing
    // past the explicitly named menu.
    assert!(code.contains("frame_0.getContentPane().add(panel_3);"));
    assert!(code.contains("panel_3.setLayout(new FlowLayout());"));
    assert!(code.contains("panel_3.add(label_4);"));
    assert!(code.contains("textfield_5.setColumns(20);"));
    assert!(code.contains("panel_3.add(button_6);"));
}

#[test]
fn parse_failures_leave_nothing_to_generate() {
    // Mismatched close: the error carries the END line; no forest exists,
    // so no output can be produced.
    let err = parse("Begin Panel\nEnd Button\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));

    let err = parse("Begin Frame\nTitle x\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn two_top_level_frames_emit_in_order_and_share_the_sequence() {
    let src = "Begin Frame\nEnd\nBegin Frame\nEnd\n";
    let code = generate(&parse(src).unwrap(), "Two");
    let first = code.find("JFrame frame_0 = new JFrame();").unwrap();
    let second = code.find("JFrame frame_1 = new JFrame();").unwrap();
    assert!(first < second);
}

#[test]
fn later_frame_captures_menu_attachment() {
    // The active frame is the most recently emitted one, not the lexical
    // ancestor of the menu bar.
    let src = "\
Begin Frame first
End
Begin Frame second
    Begin MenuBar
    End
End
";
    let code = generate(&parse(src).unwrap(), "Two");
    assert!(code.contains("second.setJMenuBar(menubar_0);"));
    assert!(!code.contains("first.setJMenuBar"));
}

#[test]
fn output_is_byte_identical_across_runs() {
    let first = generate(&parse(DEMO).unwrap(), "Demo");
    let second = generate(&parse(DEMO).unwrap(), "Demo");
    assert_eq!(first, second);
}
