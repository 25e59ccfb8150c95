#![forbid(unsafe_code)]

//! Property-based invariant tests for the navigation state machine.
//!
//! Verifies structural guarantees that must hold for any command sequence
//! on a bounded tree:
//!
//! 1. `level` always equals successful forward steps minus successful
//!    backward steps.
//! 2. `level` never goes negative and never exceeds the maximum depth.
//! 3. No command issued while a transition is in flight changes `level`.
//! 4. `is_open` is untouched by navigation commands.
//! 5. The widget's animating flag always matches the model's.

use proptest::prelude::*;
use slidemenu_core::{Event, HostSurface, MemoryHost, NodeId, NodeKind};
use slidemenu_widgets::{SlideMenu, SlideMenuOptions};

const MAX_DEPTH: u32 = 2;

/// A chain menu: level-0 anchor owns a submenu, level-1 anchor owns a
/// submenu, level-2 anchor is a leaf.
fn chain_menu() -> (MemoryHost, NodeId, Vec<NodeId>) {
    let mut host = MemoryHost::new();
    let root = host.create(NodeKind::Block);
    let mut parent = {
        let list = host.create(NodeKind::List);
        host.append(root, list);
        list
    };

    let mut anchors = Vec::new();
    for depth in 0..=MAX_DEPTH {
        let item = host.create(NodeKind::Item);
        host.append(parent, item);
        let link = host.create(NodeKind::Link);
        host.set_text(link, &format!("level {depth}"));
        host.append(item, link);
        anchors.push(link);

        if depth < MAX_DEPTH {
            let sublist = host.create(NodeKind::List);
            host.append(item, sublist);
            parent = sublist;
        }
    }
    (host, root, anchors)
}

#[derive(Debug, Clone, Copy)]
enum Cmd {
    /// Click the anchor at the current depth.
    Forward,
    /// Navigate one level back.
    Back,
    /// Deliver the completion signal.
    Complete,
}

fn arb_cmd() -> impl Strategy<Value = Cmd> {
    prop_oneof![
        3 => Just(Cmd::Forward),
        3 => Just(Cmd::Back),
        2 => Just(Cmd::Complete),
    ]
}

proptest! {
    #[test]
    fn level_counts_successful_steps(cmds in proptest::collection::vec(arb_cmd(), 0..48)) {
        let (host, root, anchors) = chain_menu();
        let mut menu = SlideMenu::new(host, root, SlideMenuOptions::default()).unwrap();
        let slider = menu.slider();

        let mut level: u32 = 0;
        let mut animating = false;
        let mut forwards: u32 = 0;
        let mut backs: u32 = 0;
        let open_before = menu.is_open();

        for cmd in cmds {
            match cmd {
                Cmd::Forward => {
                    let anchor = anchors[level as usize];
                    menu.handle_event(&Event::Click { target: anchor });
                    // Succeeds only when idle and below the deepest level.
                    if !animating && level < MAX_DEPTH {
                        level += 1;
                        forwards += 1;
                        animating = true;
                    }
                }
                Cmd::Back => {
                    menu.back();
                    if !animating && level > 0 {
                        level -= 1;
                        backs += 1;
                        animating = true;
                    }
                }
                Cmd::Complete => {
                    menu.handle_event(&Event::TransitionEnd { node: slider });
                    animating = false;
                }
            }

            prop_assert_eq!(menu.level(), level);
            prop_assert_eq!(menu.level(), forwards - backs);
            prop_assert!(menu.level() <= MAX_DEPTH);
            prop_assert_eq!(menu.is_animating(), animating);
            prop_assert_eq!(menu.is_open(), open_before);
        }
    }
}
