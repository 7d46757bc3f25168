use navshell::{
    infrastructure::test_terminal::TestTerminal,
    model::{
        navigation::{NavigationModel, ValidationError},
        shell::{render, AppShell},
    },
    presentation::{
        components::ShellComponent,
        query::{get_by_text, get_text_position, query_all_by_text, LookupMiss},
    },
};
use pretty_assertions::assert_eq;

fn home_and_clients() -> NavigationModel {
    NavigationModel::new([("Home", "/"), ("Clients", "/clients")]).expect("valid model")
}

#[test]
fn renders_home_and_clients_links() {
    let mut shell = AppShell::new(home_and_clients());
    let tree = shell.render();

    let home = get_by_text(&tree, "Home").expect("Home link");
    assert_eq!(home.target(), "/");
    assert_eq!(query_all_by_text(&tree, "Home").len(), 1);

    let clients = get_by_text(&tree, "Clients").expect("Clients link");
    assert_eq!(clients.target(), "/clients");
    assert_eq!(query_all_by_text(&tree, "Clients").len(), 1);

    assert_eq!(
        get_by_text(&tree, "Invoices"),
        Err(LookupMiss {
            text: "Invoices".to_string()
        })
    );
}

#[test]
fn renders_links_in_model_order() {
    let model =
        NavigationModel::new([("Clients", "/clients"), ("Home", "/")]).expect("valid model");
    assert_eq!(render(&model).texts(), vec!["Clients", "Home"]);
}

#[test]
fn renders_every_entry_once_with_its_target() {
    let entries = [
        ("Home", "/"),
        ("Clients", "/clients"),
        ("Invoices", "/invoices"),
        ("Settings", "/settings"),
    ];
    let model = NavigationModel::new(entries).expect("valid model");
    let tree = render(&model);

    assert_eq!(tree.len(), entries.len());
    for (node, (label, target)) in tree.nodes().iter().zip(entries) {
        assert_eq!(node.text(), label);
        assert_eq!(node.target(), target);
    }
}

#[test]
fn rendering_twice_gives_equivalent_trees() {
    let mut shell = AppShell::new(home_and_clients());
    let first = shell.render();
    let second = shell.render();
    assert_eq!(first, second);
}

#[test]
fn empty_model_renders_empty_bar() {
    let mut shell = AppShell::new(NavigationModel::default());
    let tree = shell.render();
    assert!(tree.is_empty());
    assert!(shell.is_mounted());
}

#[test]
fn duplicate_label_is_rejected() {
    let result = NavigationModel::new([("Home", "/"), ("Home", "/home")]);
    assert_eq!(
        result,
        Err(ValidationError::DuplicateLabel {
            label: "Home".to_string()
        })
    );
}

#[test]
fn drawn_terminal_shows_links() {
    let mut shell = AppShell::new(home_and_clients());
    let tree = shell.render();
    let mut terminal = TestTerminal::new(60, 10).expect("failed to create TestTerminal");

    terminal
        .draw(|frame| {
            let area = frame.area();
            ShellComponent::new().view(&shell, &tree, frame, area);
        })
        .expect("draw");

    let buf = terminal.buffer();
    let home = get_text_position(buf, "Home").expect("Home is drawn");
    let clients = get_text_position(buf, "Clients").expect("Clients is drawn");
    assert_eq!(home.y, 0);
    assert_eq!(clients.y, 0);
    assert!(home.x < clients.x);
    assert!(get_text_position(buf, "Invoices").is_err());
    assert_eq!(terminal.draws, 1);
}
