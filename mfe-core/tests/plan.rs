use mfe_core::error::ScaffoldError;
use mfe_core::manifest::ManifestEdit;
use mfe_core::plan::{build, build_remote, AppRole, WorkspaceRequest};

fn request(host: &str, remotes: &[&str]) -> WorkspaceRequest {
    WorkspaceRequest::new(host, remotes.iter().map(|s| s.to_string()).collect())
}

// ── plan shape ──────────────────────────────────────────────────────

#[test]
fn host_comes_first_then_remotes_in_request_order() {
    let plan = build(&request("shell", &["cart", "profile"])).unwrap();
    let order: Vec<&str> = plan.apps().map(|app| app.name.as_str()).collect();
    assert_eq!(order, vec!["shell", "cart", "profile"]);
    assert_eq!(plan.app_count(), 3);
}

#[test]
fn roles_and_ports_follow_the_request() {
    let plan = build(&request("shell", &["cart", "profile"])).unwrap();
    assert_eq!(plan.host.role, AppRole::Host);
    assert_eq!(plan.host.port, 3000);
    assert!(plan.remotes.iter().all(|r| r.role == AppRole::Remote));
    assert_eq!(plan.remotes[0].port, 3001);
    assert_eq!(plan.remotes[1].port, 3002);
}

#[test]
fn app_roots_live_under_apps() {
    let plan = build(&request("shell", &["cart"])).unwrap();
    assert_eq!(plan.host.root(), "apps/shell");
    assert_eq!(plan.remotes[0].root(), "apps/cart");
}

#[test]
fn custom_ports_flow_through_to_env_files() {
    let mut req = request("shell", &["cart"]);
    req.host_port = 4000;
    req.remote_base_port = 5000;
    let plan = build(&req).unwrap();
    assert_eq!(plan.host.artifacts[".env"], "PORT=4000\n");
    assert_eq!(plan.remotes[0].artifacts[".env"], "PORT=5000\n");
}

// ── host artifacts ──────────────────────────────────────────────────

#[test]
fn host_federation_config_maps_every_remote() {
    let plan = build(&request("shell", &["cart", "profile"])).unwrap();
    let config = &plan.host.artifacts["module-federation.config.js"];
    assert!(config.contains("name: 'shell'"));
    assert!(config.contains("cart: 'cart@http://localhost:3001/remoteEntry.js'"));
    assert!(config.contains("profile: 'profile@http://localhost:3002/remoteEntry.js'"));
    assert!(config.contains("filename: 'remoteEntry.js'"));
    assert!(!config.contains("exposes"));
}

#[test]
fn host_page_wires_both_components_per_remote() {
    let plan = build(&request("shell", &["cart", "profile"])).unwrap();
    let page = &plan.host.artifacts["src/app/page.tsx"];
    assert!(page.contains("const CartCounter = dynamic("));
    assert!(page.contains("const CartCard = dynamic("));
    assert!(page.contains("const ProfileCounter = dynamic("));
    assert!(page.contains("const ProfileCard = dynamic("));
    assert!(page.contains("await import('cart/counter')"));
    assert!(page.contains("await import('cart/card')"));
    assert!(page.contains("ssr: false"));
    assert!(page.contains("<Suspense fallback={<div>Loading cart counter...</div>}>"));
    assert!(page.contains("Host App: shell"));
}

#[test]
fn host_type_declarations_cover_every_remote() {
    let plan = build(&request("shell", &["cart", "profile"])).unwrap();
    let decls = &plan.host.artifacts["src/types/remote-modules.d.ts"];
    assert!(decls.contains("declare module 'cart/counter'"));
    assert!(decls.contains("declare module 'profile/counter'"));
}

#[test]
fn host_env_local_lists_remote_urls_uppercased() {
    let plan = build(&request("shell", &["cart", "profile"])).unwrap();
    let env = &plan.host.artifacts[".env.local"];
    assert!(env.contains("NEXT_PUBLIC_CART_URL=http://localhost:3001"));
    assert!(env.contains("NEXT_PUBLIC_PROFILE_URL=http://localhost:3002"));
}

#[test]
fn host_bootstrap_injects_each_remote_entry() {
    let plan = build(&request("shell", &["cart"])).unwrap();
    let bootstrap = &plan.host.artifacts["src/bootstrap.js"];
    assert!(bootstrap.contains("'cart': 'http://localhost:3001/remoteEntry.js'"));
    assert!(bootstrap.contains("injectScript"));
    assert!(bootstrap.contains("initializeApp()"));
}

#[test]
fn host_carries_federation_support_files() {
    let plan = build(&request("shell", &[])).unwrap();
    let paths: Vec<&str> = plan.host.artifacts.keys().map(String::as_str).collect();
    assert!(paths.contains(&"src/app/init-remote.js"));
    assert!(paths.contains(&"src/app/layout.tsx"));
    assert!(paths.contains(&"public/remoteEntry.js"));
    assert!(paths.contains(&"next-env.d.ts"));
    assert!(paths.contains(&"next.config.js"));
    assert_eq!(plan.host.artifacts["public/remoteEntry.js"], "");
}

#[test]
fn zero_remotes_still_yields_a_complete_host() {
    let plan = build(&request("shell", &[])).unwrap();
    assert!(plan.remotes.is_empty());
    assert!(plan.host.artifacts["module-federation.config.js"].contains("const remotes = {};"));
    assert!(!plan.host.artifacts["src/app/page.tsx"].contains("= dynamic("));
    assert_eq!(plan.host.artifacts["src/types/remote-modules.d.ts"], "");
    assert_eq!(plan.host.artifacts[".env.local"], "");
}

// ── remote artifacts ────────────────────────────────────────────────

#[test]
fn remote_config_exposes_counter_and_card() {
    let plan = build(&request("shell", &["cart"])).unwrap();
    let config = &plan.remotes[0].artifacts["module-federation.config.js"];
    assert!(config.contains("name: 'cart'"));
    assert!(config.contains("'./counter': './src/components/exposed/Counter.tsx'"));
    assert!(config.contains("'./card': './src/components/exposed/Card.tsx'"));
    assert!(!config.contains("remotes"));
}

#[test]
fn remote_components_are_titled_with_the_remote_name() {
    let plan = build(&request("shell", &["cart"])).unwrap();
    let counter = &plan.remotes[0].artifacts["src/components/exposed/Counter.tsx"];
    let card = &plan.remotes[0].artifacts["src/components/exposed/Card.tsx"];
    assert!(counter.contains("'use client'"));
    assert!(counter.contains("Counter from cart"));
    assert!(card.contains("Card from cart"));
    assert!(card.contains("This is a card component exposed from cart"));
}

#[test]
fn remote_plans_never_reference_sibling_remotes() {
    let plan = build(&request("shell", &["cart", "profile"])).unwrap();
    for (path, content) in &plan.remotes[0].artifacts {
        assert!(!content.contains("profile"), "{path} mentions a sibling remote");
    }
}

// ── manifest edits ──────────────────────────────────────────────────

#[test]
fn hosts_and_remotes_schedule_their_own_edits() {
    let plan = build(&request("shell", &["cart"])).unwrap();
    assert_eq!(
        plan.host.edits,
        vec![
            ManifestEdit::PackageManifest {
                name: "shell".to_string()
            },
            ManifestEdit::TsconfigInclude,
        ]
    );
    assert_eq!(
        plan.remotes[0].edits,
        vec![ManifestEdit::PackageManifest {
            name: "cart".to_string()
        }]
    );
}

// ── cross-file consistency ──────────────────────────────────────────

#[test]
fn every_artifact_agrees_on_each_remote_port() {
    let plan = build(&request("shell", &["cart", "profile", "search"])).unwrap();
    let config = &plan.host.artifacts["module-federation.config.js"];
    let bootstrap = &plan.host.artifacts["src/bootstrap.js"];
    let env = &plan.host.artifacts[".env.local"];

    for (index, remote) in plan.remotes.iter().enumerate() {
        let port = 3001 + index as u16;
        let url = format!("http://localhost:{port}/remoteEntry.js");
        assert!(config.contains(&format!("{}@{url}", remote.name)));
        assert!(bootstrap.contains(&url));
        assert!(env.contains(&format!("http://localhost:{port}")));
        assert_eq!(remote.artifacts[".env"], format!("PORT={port}\n"));
    }
}

#[test]
fn building_twice_yields_identical_plans() {
    let req = request("shell", &["cart", "profile"]);
    assert_eq!(build(&req).unwrap(), build(&req).unwrap());
}

// ── validation ──────────────────────────────────────────────────────

#[test]
fn blank_host_name_is_rejected() {
    assert_eq!(
        build(&request("", &[])).unwrap_err(),
        ScaffoldError::EmptyAppName
    );
    assert_eq!(
        build(&request("   ", &[])).unwrap_err(),
        ScaffoldError::EmptyAppName
    );
}

#[test]
fn invalid_host_and_remote_names_are_reported_together() {
    let err = build(&request("bad shell", &["ok", "bad remote"])).unwrap_err();
    assert_eq!(
        err,
        ScaffoldError::InvalidNames(vec!["bad shell".to_string(), "bad remote".to_string()])
    );
}

#[test]
fn remote_shadowing_the_host_is_a_duplicate() {
    let err = build(&request("shell", &["cart", "Shell"])).unwrap_err();
    assert_eq!(err, ScaffoldError::DuplicateNames(vec!["Shell".to_string()]));
}

// ── standalone remotes ──────────────────────────────────────────────

#[test]
fn standalone_remote_matches_a_workspace_remote() {
    let plan = build(&request("shell", &["cart"])).unwrap();
    let standalone = build_remote("cart", 3001).unwrap();
    assert_eq!(standalone, plan.remotes[0]);
}

#[test]
fn standalone_remote_validates_its_name() {
    assert_eq!(
        build_remote("", 3001).unwrap_err(),
        ScaffoldError::EmptyAppName
    );
    assert_eq!(
        build_remote("bad name", 3001).unwrap_err(),
        ScaffoldError::InvalidNames(vec!["bad name".to_string()])
    );
}
