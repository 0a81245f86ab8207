use grid_astar::{AstarSolver, EditorEvent, GridConfig, GridEditor, GridSolver};
use std::ops::ControlFlow;

// Replays a sequence of clicks on a 10x10 board of 200 pixels, as a front-end would forward them,
// and prints every frame of the resulting search.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = GridEditor::new(GridConfig::new(10, 200))?;
    let mut events = vec![
        EditorEvent::Primary { x: 10, y: 10 },
        EditorEvent::Primary { x: 190, y: 190 },
    ];
    // A wall across row 5 with a gap in the last column
    for col in 0..9 {
        events.push(EditorEvent::Primary {
            x: 100,
            y: col * 20 + 5,
        });
    }
    for event in events {
        editor.handle(event, |_| {})?;
    }

    let mut frames = 0;
    let result = editor.handle(EditorEvent::Run, |grid| {
        frames += 1;
        println!("{grid}");
    })?;
    println!("{frames} frames, result: {:?}", result);

    // Close the gap and try again
    editor.handle(EditorEvent::Primary { x: 100, y: 185 }, |_| {})?;
    println!("{:?}", editor.run(|_| {})?);

    // The extension point for early abort: stop after five expansions
    if let (Some(start), Some(end)) = (editor.start(), editor.end()) {
        let mut grid = editor.grid().clone();
        grid.clear_search_marks();
        let mut budget = 5;
        let result = AstarSolver::new().search_with_abort(&mut grid, start, end, |_| {
            budget -= 1;
            if budget == 0 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        println!("{:?}\n{}", result, grid);
    }
    Ok(())
}
