//! Tests for the widget system.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use fifteen_core::TreeError;
    use fifteen_render::{Color, Point, Rect, RecordingSurface, Size, Surface};

    use crate::widget::{
        EventKind, Gui, InputState, MouseButton, MouseEvent, View, Widget, WidgetBase, WidgetId,
        WidgetTree,
    };
    use crate::Error;

    type Log = Rc<RefCell<Vec<String>>>;

    /// A leaf widget that records its update and draw calls.
    struct Probe {
        name: &'static str,
        log: Log,
    }

    impl Probe {
        fn new(name: &'static str, log: &Log) -> Self {
            Self {
                name,
                log: log.clone(),
            }
        }
    }

    impl Widget for Probe {
        fn update(&mut self, _base: &WidgetBase) {
            self.log.borrow_mut().push(format!("update {}", self.name));
        }

        fn draw(&self, base: &WidgetBase, surface: &mut dyn Surface) {
            surface.fill_rect(base.rect(), Color::BLACK);
            self.log.borrow_mut().push(format!("draw {}", self.name));
        }

        fn describe(&self) -> Option<String> {
            Some(self.name.to_owned())
        }
    }

    fn new_log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn record_events(tree: &mut WidgetTree, id: WidgetId, tag: &'static str, log: &Log) {
        for kind in EventKind::ALL {
            let log = log.clone();
            tree.connect(id, kind, move |_tree, _id, _event| {
                log.borrow_mut().push(format!("{tag} {kind}"));
                Ok(())
            })
            .unwrap();
        }
    }

    fn square(x: f32, y: f32, side: f32) -> Rect {
        Rect::new(x, y, side, side)
    }

    // =========================================================================
    // Hierarchy
    // =========================================================================

    #[test]
    fn test_add_widget_links_both_ways() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 100.0), View::new());
        let child = tree.insert(square(0.0, 0.0, 10.0), View::new());

        tree.add_widget(root, child).unwrap();

        assert_eq!(tree.parent(child).unwrap(), Some(root));
        assert_eq!(tree.children(root).unwrap(), &[child]);
        assert_eq!(tree.root(child).unwrap(), root);
        assert_eq!(tree.root(root).unwrap(), root);
    }

    #[test]
    fn test_second_parent_is_rejected() {
        let mut tree = WidgetTree::new();
        let a = tree.insert(square(0.0, 0.0, 100.0), View::new());
        let b = tree.insert(square(0.0, 0.0, 100.0), View::new());
        let child = tree.insert_child(a, square(0.0, 0.0, 10.0), View::new()).unwrap();

        let err = tree.add_widget(b, child).unwrap_err();
        assert_eq!(err, TreeError::AlreadyParented { child, parent: a });
        assert!(tree.children(b).unwrap().is_empty());
        assert_eq!(tree.parent(child).unwrap(), Some(a));
    }

    #[test]
    fn test_leaf_cannot_hold_children() {
        let log = new_log();
        let mut tree = WidgetTree::new();
        let leaf = tree.insert(square(0.0, 0.0, 10.0), Probe::new("leaf", &log));
        let orphan = tree.insert(square(0.0, 0.0, 10.0), View::new());

        assert_eq!(tree.add_widget(leaf, orphan), Err(TreeError::NotAView(leaf)));
        assert!(matches!(
            tree.insert_child(leaf, square(0.0, 0.0, 1.0), View::new()),
            Err(TreeError::NotAView(_))
        ));
        // The rejected insert_child must not leave a stray widget behind.
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_cycles_are_rejected() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 100.0), View::new());
        let middle = tree.insert_child(root, square(0.0, 0.0, 50.0), View::new()).unwrap();
        let leaf_view = tree.insert_child(middle, square(0.0, 0.0, 10.0), View::new()).unwrap();

        assert_eq!(tree.add_widget(root, root), Err(TreeError::CircularParentage));
        assert_eq!(tree.add_widget(leaf_view, root), Err(TreeError::CircularParentage));
    }

    #[test]
    fn test_remove_destroys_subtree() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 100.0), View::new());
        let branch = tree.insert_child(root, square(0.0, 0.0, 50.0), View::new()).unwrap();
        let leaf = tree.insert_child(branch, square(0.0, 0.0, 10.0), View::new()).unwrap();
        let sibling = tree.insert_child(root, square(50.0, 0.0, 50.0), View::new()).unwrap();

        tree.remove_widget(root, branch).unwrap();

        assert!(!tree.contains_widget(branch));
        assert!(!tree.contains_widget(leaf));
        assert_eq!(tree.children(root).unwrap(), &[sibling]);
        assert_eq!(tree.rect(leaf), Err(TreeError::InvalidWidgetId(leaf)));
        assert_eq!(
            tree.remove_widget(root, branch),
            Err(TreeError::NotAChild { view: root, child: branch })
        );
    }

    #[test]
    fn test_clear_children() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 100.0), View::new());
        for i in 0..4 {
            let view = tree.insert_child(root, square(i as f32 * 10.0, 0.0, 10.0), View::new()).unwrap();
            tree.insert_child(view, square(0.0, 0.0, 1.0), View::new()).unwrap();
        }
        assert_eq!(tree.len(), 9);

        tree.clear_children(root).unwrap();

        assert_eq!(tree.len(), 1);
        assert!(tree.children(root).unwrap().is_empty());
    }

    #[test]
    fn test_typed_access() {
        let log = new_log();
        let mut tree = WidgetTree::new();
        let probe = tree.insert(square(0.0, 0.0, 10.0), Probe::new("p", &log));

        assert_eq!(tree.widget::<Probe>(probe).unwrap().name, "p");
        tree.widget_mut::<Probe>(probe).unwrap().name = "q";
        assert_eq!(tree.describe(probe).unwrap().as_deref(), Some("q"));

        match tree.widget::<View>(probe) {
            Err(TreeError::WrongWidgetType { expected, got }) => {
                assert!(expected.ends_with("View"));
                assert!(got.ends_with("Probe"));
            }
            other => panic!("expected a type mismatch, got {:?}", other.map(|_| ())),
        }
    }

    // =========================================================================
    // Hit testing and callbacks
    // =========================================================================

    #[test]
    fn test_contains_point_inclusive_edges() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Rect::new(10.0, 20.0, 30.0, 40.0), View::new());

        for (x, y) in [(10.0, 20.0), (40.0, 60.0), (10.0, 60.0), (40.0, 20.0), (25.0, 40.0)] {
            assert!(tree.contains_point(id, Point::new(x, y)).unwrap(), "({x}, {y})");
        }
        for (x, y) in [(9.0, 20.0), (41.0, 60.0), (10.0, 19.0), (40.0, 61.0)] {
            assert!(!tree.contains_point(id, Point::new(x, y)).unwrap(), "({x}, {y})");
        }
    }

    #[test]
    fn test_callbacks_run_in_order_and_stop_on_error() {
        let log = new_log();
        let mut tree = WidgetTree::new();
        let id = tree.insert(square(0.0, 0.0, 10.0), View::new());

        for n in 0..3 {
            let log = log.clone();
            tree.connect(id, EventKind::MouseUp, move |_tree, _id, _event| {
                log.borrow_mut().push(n.to_string());
                if n == 1 {
                    return Err(Error::TilesNotAdjacent);
                }
                Ok(())
            })
            .unwrap();
        }

        let result = tree.notify(id, EventKind::MouseUp, &MouseEvent::at(Point::ZERO));

        assert!(matches!(result, Err(Error::TilesNotAdjacent)));
        assert_eq!(*log.borrow(), ["0", "1"]);
    }

    #[test]
    fn test_notify_without_callbacks_is_noop() {
        let log = new_log();
        let mut tree = WidgetTree::new();
        let id = tree.insert(square(0.0, 0.0, 10.0), Probe::new("p", &log));

        tree.notify(id, EventKind::Click, &MouseEvent::at(Point::ZERO)).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_callback_may_remove_its_own_widget() {
        let log = new_log();
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 100.0), View::new());
        let doomed = tree.insert_child(root, square(0.0, 0.0, 10.0), View::new()).unwrap();

        tree.connect(doomed, EventKind::Click, move |tree, id, _event| {
            let parent = tree.parent(id)?.ok_or(TreeError::InvalidWidgetId(id))?;
            tree.remove_widget(parent, id)?;
            Ok(())
        })
        .unwrap();
        record_events(&mut tree, doomed, "doomed", &log);

        tree.notify(root, EventKind::Click, &MouseEvent::at(Point::new(5.0, 5.0))).unwrap();

        assert!(!tree.contains_widget(doomed));
        // The snapshot taken before the first callback still runs to the end.
        assert_eq!(*log.borrow(), ["doomed click"]);
    }

    #[test]
    fn test_view_forwards_to_first_child_under_pointer() {
        let log = new_log();
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 100.0), View::new());
        let first = tree.insert_child(root, square(0.0, 0.0, 60.0), View::new()).unwrap();
        let second = tree.insert_child(root, square(40.0, 40.0, 60.0), View::new()).unwrap();
        record_events(&mut tree, first, "first", &log);
        record_events(&mut tree, second, "second", &log);

        let overlap = MouseEvent::at(Point::new(50.0, 50.0));
        let only_second = MouseEvent::at(Point::new(90.0, 90.0));
        let nobody = MouseEvent::at(Point::new(90.0, 10.0));

        tree.notify(root, EventKind::MouseDown, &overlap).unwrap();
        tree.notify(root, EventKind::MouseMove, &only_second).unwrap();
        tree.notify(root, EventKind::Click, &nobody).unwrap();

        assert_eq!(*log.borrow(), ["first mousedown", "second mousemove"]);
        assert_eq!(tree.base(root).unwrap().connection_count(EventKind::Click), 1);
    }

    #[test]
    fn test_forwarding_descends_one_level_at_a_time() {
        let log = new_log();
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 100.0), View::new());
        let middle = tree.insert_child(root, square(0.0, 0.0, 50.0), View::new()).unwrap();
        let inner = tree.insert_child(middle, square(0.0, 0.0, 10.0), View::new()).unwrap();
        record_events(&mut tree, middle, "middle", &log);
        record_events(&mut tree, inner, "inner", &log);

        tree.notify(root, EventKind::Click, &MouseEvent::at(Point::new(5.0, 5.0))).unwrap();

        // middle's own forwarding callback was connected first.
        assert_eq!(*log.borrow(), ["inner click", "middle click"]);
    }

    #[test]
    fn test_update_and_draw_visit_in_child_order() {
        let log = new_log();
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 100.0), View::with_background(Color::WHITE));
        let branch = tree.insert_child(root, square(0.0, 0.0, 50.0), View::new()).unwrap();
        tree.insert_child(branch, square(0.0, 0.0, 10.0), Probe::new("a", &log)).unwrap();
        tree.insert_child(root, square(50.0, 0.0, 10.0), Probe::new("b", &log)).unwrap();

        tree.update(root).unwrap();
        let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
        tree.draw(root, &mut surface).unwrap();

        assert_eq!(*log.borrow(), ["update a", "update b", "draw a", "draw b"]);
        // Background first, then the two probes.
        assert_eq!(surface.commands().len(), 3);
    }

    // =========================================================================
    // Dispatcher
    // =========================================================================

    fn gui_with_recorder() -> (Gui<InputState>, Log) {
        let log = new_log();
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 400.0), View::new());
        record_events(&mut tree, root, "root", &log);
        let gui = Gui::new(tree, root, square(0.0, 0.0, 400.0), InputState::new()).unwrap();
        (gui, log)
    }

    #[test]
    fn test_press_release_sequence() {
        let (mut gui, log) = gui_with_recorder();

        // up, down, down, up
        gui.update().unwrap();
        gui.input_mut().press(MouseButton::Left);
        gui.update().unwrap();
        gui.update().unwrap();
        gui.input_mut().release(MouseButton::Left);
        gui.update().unwrap();

        assert_eq!(*log.borrow(), ["root mousedown", "root mouseup", "root click"]);
        assert!(!gui.is_button_held());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let (mut gui, log) = gui_with_recorder();

        gui.update().unwrap();
        gui.input_mut().release(MouseButton::Left);
        gui.update().unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_press_outside_offset_root_is_not_latched() {
        let log = new_log();
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(100.0, 100.0, 200.0), View::new());
        record_events(&mut tree, root, "root", &log);
        let mut gui = Gui::new(tree, root, square(0.0, 0.0, 200.0), InputState::new()).unwrap();

        // Maps to (50, 50), outside the root's own rect.
        gui.input_mut().set_pointer_position(Point::new(50.0, 50.0));
        gui.input_mut().press(MouseButton::Left);
        gui.update().unwrap();
        assert!(!gui.is_button_held());

        // Still held, now inside: the press registers here.
        gui.input_mut().set_pointer_position(Point::new(150.0, 150.0));
        gui.update().unwrap();
        assert!(gui.is_button_held());

        gui.input_mut().release(MouseButton::Left);
        gui.update().unwrap();

        assert_eq!(
            *log.borrow(),
            [
                "root mousemove",
                "root mousemove",
                "root mousedown",
                "root mouseup",
                "root click"
            ]
        );
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let (mut gui, log) = gui_with_recorder();

        gui.input_mut().press(MouseButton::Right);
        gui.update().unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_mousemove_only_on_change_with_delta() {
        let log = new_log();
        let deltas = Rc::new(RefCell::new(Vec::new()));
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 400.0), View::new());
        record_events(&mut tree, root, "root", &log);
        let seen = deltas.clone();
        tree.connect(root, EventKind::MouseMove, move |_tree, _id, event| {
            seen.borrow_mut().push((event.position, event.delta));
            Ok(())
        })
        .unwrap();

        let mut input = InputState::new();
        input.set_pointer_position(Point::new(100.0, 100.0));
        let mut gui = Gui::new(tree, root, square(0.0, 0.0, 400.0), input).unwrap();

        gui.update().unwrap();
        gui.input_mut().set_pointer_position(Point::new(110.5, 95.0));
        gui.update().unwrap();
        gui.update().unwrap();

        assert_eq!(*log.borrow(), ["root mousemove"]);
        assert_eq!(
            *deltas.borrow(),
            [(Point::new(110.0, 95.0), Point::new(10.0, -5.0))]
        );
    }

    #[test]
    fn test_mapping_scales_and_clamps() {
        let (mut gui, _log) = gui_with_recorder();
        gui.set_viewport(Rect::new(200.0, 0.0, 800.0, 800.0));

        assert_eq!(gui.map_to_root(Point::new(200.0, 0.0)).unwrap(), Point::ZERO);
        assert_eq!(gui.map_to_root(Point::new(601.0, 401.0)).unwrap(), Point::new(200.0, 200.0));
        assert_eq!(gui.map_to_root(Point::new(0.0, -50.0)).unwrap(), Point::ZERO);
        assert_eq!(
            gui.map_to_root(Point::new(5000.0, 5000.0)).unwrap(),
            Point::new(400.0, 400.0)
        );
    }

    #[test]
    fn test_viewport_center_maps_to_root_center() {
        let (mut gui, _log) = gui_with_recorder();
        let viewport = Rect::new(160.0, 0.0, 480.0, 480.0);
        gui.set_viewport(viewport);

        assert_eq!(gui.viewport(), viewport);
        assert_eq!(gui.map_to_root(viewport.center()).unwrap(), Point::new(200.0, 200.0));
    }

    #[test]
    fn test_empty_viewport_maps_to_origin() {
        let (mut gui, _log) = gui_with_recorder();
        gui.set_viewport(Rect::ZERO);

        assert_eq!(gui.map_to_root(Point::new(123.0, 45.0)).unwrap(), Point::ZERO);
    }

    #[test]
    fn test_gui_rejects_unknown_root() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(square(0.0, 0.0, 10.0), View::new());
        let other = WidgetTree::new();

        let result = Gui::new(other, root, square(0.0, 0.0, 10.0), InputState::new());
        assert!(matches!(result, Err(Error::Tree(TreeError::InvalidWidgetId(_)))));
    }
}
