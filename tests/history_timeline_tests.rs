use inkboard::AnnotationSurface;

fn draw_stroke(surface: &mut AnnotationSurface, origin: (i32, i32)) {
    surface.on_input_start(origin);
    surface.on_input_move(&[(origin.0 + 4, origin.1 + 2), (origin.0 + 8, origin.1 + 5)]);
    surface.on_input_end((origin.0 + 12, origin.1 + 8));
}

#[test]
fn commit_after_undo_discards_redo_tail() {
    let mut surface = AnnotationSurface::new();
    surface.set_size(96, 96);

    draw_stroke(&mut surface, (10, 10)); // A
    draw_stroke(&mut surface, (20, 20)); // B
    draw_stroke(&mut surface, (30, 30)); // C
    surface.undo();
    draw_stroke(&mut surface, (40, 40)); // D replaces C

    assert_eq!(surface.history().len(), 3);
    assert_eq!(surface.history().cursor(), 3);

    // C is gone for good: redo has nothing to reactivate.
    let before = surface.pixels().expect("sized").to_vec();
    surface.redo();
    assert_eq!(surface.pixels().expect("sized"), &before[..]);
    assert_eq!(surface.history().cursor(), 3);

    let origins: Vec<(i32, i32)> = surface
        .history()
        .active()
        .iter()
        // points[1] is the original touch location; [0] is synthesized.
        .map(|stroke| stroke.points[1])
        .collect();
    assert_eq!(origins, vec![(10, 10), (20, 20), (40, 40)]);
}

#[test]
fn undo_walks_back_to_empty_then_stops() {
    let mut surface = AnnotationSurface::new();
    surface.set_size(96, 96);

    draw_stroke(&mut surface, (10, 10));
    draw_stroke(&mut surface, (30, 30));

    surface.undo();
    surface.undo();
    assert_eq!(surface.history().cursor(), 0);

    let blank = surface.pixels().expect("sized").to_vec();
    surface.undo();
    assert_eq!(surface.history().cursor(), 0);
    assert_eq!(surface.pixels().expect("sized"), &blank[..]);

    // Both strokes are still redo-able in order.
    surface.redo();
    assert_eq!(surface.history().cursor(), 1);
    surface.redo();
    assert_eq!(surface.history().cursor(), 2);
}

#[test]
fn clear_empties_history_and_disables_undo_redo() {
    let mut surface = AnnotationSurface::new();
    surface.set_size(96, 96);

    draw_stroke(&mut surface, (10, 10));
    draw_stroke(&mut surface, (30, 30));
    surface.undo();
    surface.clear();

    assert_eq!(surface.history().len(), 0);
    assert_eq!(surface.history().cursor(), 0);

    let blank = surface.pixels().expect("sized").to_vec();
    surface.undo();
    surface.redo();
    assert_eq!(surface.pixels().expect("sized"), &blank[..]);
    assert_eq!(surface.history().len(), 0);
}
