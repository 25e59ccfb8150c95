//! Submenu decoration bootstrap.
//!
//! Runs once at construction when the menu has any items. Every captured
//! anchor whose immediate following sibling is a list gets its label
//! spliced with the configured fragments, and (unless disabled) a back
//! control is injected as the first entry of its submenu. Anchors without
//! a following list are left untouched and keep behaving as ordinary
//! links.
//!
//! Interception of the default activation happens in the click path, not
//! here: the menu reports clicks on submenu-owning anchors as handled.

use slidemenu_core::{HostSurface, NodeFlags, NodeId, NodeKind};

use crate::options::SlideMenuOptions;

pub(crate) fn decorate_submenus<S: HostSurface>(
    surface: &mut S,
    anchors: &[NodeId],
    options: &SlideMenuOptions,
) {
    for &anchor in anchors {
        let Some(submenu) = surface.next_sibling_list(anchor) else {
            continue;
        };

        // Splice the label around the original title; the back control
        // below is labeled with the original title too.
        let title = surface.text(anchor);
        surface.set_text(
            anchor,
            &format!(
                "{}{}{}",
                options.submenu_link_before, title, options.submenu_link_after
            ),
        );

        if options.show_back_link {
            let back = surface.create(NodeKind::Link);
            surface.set_text(
                back,
                &format!(
                    "{}{}{}",
                    options.back_link_before, title, options.back_link_after
                ),
            );
            surface.insert_flags(back, NodeFlags::CONTROL);
            surface.set_attr(back, "data-action", "back");
            surface.set_attr(back, "href", "#");

            let entry = surface.create(NodeKind::Item);
            surface.append(entry, back);
            surface.prepend(submenu, entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidemenu_core::MemoryHost;

    /// list > item > (link "Products" + sublist > item > link "Widgets")
    fn menu_fragment(host: &mut MemoryHost) -> (NodeId, NodeId, NodeId) {
        let list = host.create(NodeKind::List);
        let item = host.create(NodeKind::Item);
        host.append(list, item);
        let link = host.create(NodeKind::Link);
        host.set_text(link, "Products");
        host.append(item, link);
        let sublist = host.create(NodeKind::List);
        host.append(item, sublist);
        let subitem = host.create(NodeKind::Item);
        host.append(sublist, subitem);
        let leaf = host.create(NodeKind::Link);
        host.set_text(leaf, "Widgets");
        host.append(subitem, leaf);
        (link, leaf, sublist)
    }

    #[test]
    fn splices_label_fragments() {
        let mut host = MemoryHost::new();
        let (link, leaf, _) = menu_fragment(&mut host);
        let options = SlideMenuOptions::new()
            .submenu_link_before("[ ")
            .submenu_link_after(" ]");

        decorate_submenus(&mut host.clone(), &[link, leaf], &options);

        assert_eq!(host.text(link), "[ Products ]");
        // Leaf anchors are untouched.
        assert_eq!(host.text(leaf), "Widgets");
    }

    #[test]
    fn injects_back_control_as_first_entry() {
        let mut host = MemoryHost::new();
        let (link, leaf, sublist) = menu_fragment(&mut host);
        let options = SlideMenuOptions::new()
            .back_link_before("back to ")
            .back_link_after("!");

        decorate_submenus(&mut host.clone(), &[link, leaf], &options);

        let first = host.children(sublist)[0];
        assert_eq!(host.kind(first), NodeKind::Item);
        let back = host.children(first)[0];
        assert_eq!(host.kind(back), NodeKind::Link);
        assert!(host.has_flag(back, NodeFlags::CONTROL));
        assert_eq!(host.attr(back, "data-action").as_deref(), Some("back"));
        assert_eq!(host.attr(back, "href").as_deref(), Some("#"));
        assert_eq!(host.attr(back, "data-target"), None);
        // Labeled with the original title, not the spliced one.
        assert_eq!(host.text(back), "back to Products!");
    }

    #[test]
    fn show_back_link_false_suppresses_injection() {
        let mut host = MemoryHost::new();
        let (link, leaf, sublist) = menu_fragment(&mut host);
        let before = host.children(sublist).len();

        let options = SlideMenuOptions::new().show_back_link(false);
        decorate_submenus(&mut host.clone(), &[link, leaf], &options);

        assert_eq!(host.children(sublist).len(), before);
    }
}
