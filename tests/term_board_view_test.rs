use term_2048::core::{Grid, MoveDispatcher};
use term_2048::term::{encode_frame_into, BoardView, CellStyle};
use term_2048::types::Direction;

#[test]
fn term_view_lays_out_title_borders_and_score() {
    let grid = Grid::new(4).unwrap();
    let view = BoardView::new(4);
    let fb = view.render(&grid);

    assert_eq!(fb.height(), 13);
    assert_eq!(fb.row_text(0).trim(), "");
    assert_eq!(fb.row_text(1).trim(), "2048");
    assert_eq!(fb.row_text(2), "┏━━━━━┳━━━━━┳━━━━━┳━━━━━┓");
    assert_eq!(fb.row_text(3), "┃     ┃     ┃     ┃     ┃");
    assert_eq!(fb.row_text(4), "┣━━━━━╋━━━━━╋━━━━━╋━━━━━┫");
    assert_eq!(fb.row_text(10), "┗━━━━━┻━━━━━┻━━━━━┻━━━━━┛");
    assert_eq!(fb.row_text(11).trim(), "");
    assert_eq!(fb.row_text(12).trim_end(), "Score: 0");
}

#[test]
fn term_view_right_justifies_tiles() {
    #[rustfmt::skip]
    let grid = Grid::from_cells(4, &[
        2, 0, 0, 2048,
        0, 16, 0, 0,
        0, 0, 0, 0,
        16384, 0, 0, 131072,
    ])
    .unwrap();
    let fb = BoardView::new(4).render(&grid);

    assert_eq!(fb.row_text(3), "┃   2 ┃     ┃     ┃2048 ┃");
    assert_eq!(fb.row_text(5), "┃     ┃  16 ┃     ┃     ┃");
    assert_eq!(fb.row_text(9), "┃16384┃     ┃     ┃ 128k┃");
}

#[test]
fn term_view_shows_accumulated_score() {
    let mut grid = Grid::from_cells(2, &[2, 2, 4, 4]).unwrap();
    MoveDispatcher::new(2).apply(&mut grid, Direction::Left);

    let view = BoardView::new(2);
    let fb = view.render(&grid);
    assert_eq!(fb.row_text(view.score_row()).trim_end(), "Score: 12");
    assert_eq!(fb.row_text(3).trim_end(), "┃   4 ┃     ┃");
    assert_eq!(fb.row_text(5).trim_end(), "┃   8 ┃     ┃");
    assert_eq!(fb.row_text(6).trim_end(), "┗━━━━━┻━━━━━┛");
}

#[test]
fn term_view_styles_title_and_tiles() {
    let grid = Grid::from_cells(2, &[2, 0, 0, 0]).unwrap();
    let fb = BoardView::new(2).render(&grid);

    let title = fb.get(8, 1).unwrap();
    assert_eq!(title.ch, '2');
    assert!(title.style.bold);

    // Borders keep the terminal's default colours.
    assert_eq!(fb.get(0, 2).unwrap().style, CellStyle::default());

    let tile = fb.get(4, 3).unwrap();
    assert_eq!(tile.ch, '2');
    assert!(tile.style.fg.is_some());
}

#[test]
fn term_view_render_into_reuses_framebuffer() {
    let view = BoardView::new(3);
    let mut fb = view.render(&Grid::from_cells(3, &[2, 0, 0, 0, 0, 0, 0, 0, 4]).unwrap());
    view.render_into(&Grid::new(3).unwrap(), &mut fb);

    assert_eq!((fb.width(), fb.height()), (view.width(), view.height()));
    assert_eq!(fb.row_text(3).trim_end(), "┃     ┃     ┃     ┃");
    assert_eq!(fb.row_text(7).trim_end(), "┃     ┃     ┃     ┃");
}

#[test]
fn term_frame_encoding_redraws_at_anchor() {
    let grid = Grid::from_cells(2, &[0, 2, 0, 0]).unwrap();
    let view = BoardView::new(2);
    let fb = view.render(&grid);

    let mut out = Vec::new();
    encode_frame_into(&fb, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("\x1b8\x1b[K\x1b7"));
    assert_eq!(text.matches("\r\n").count(), view.height() as usize);
    assert!(text.contains("┏━━━━━┳━━━━━┓"));
    assert!(text.contains("Score: "));
}
