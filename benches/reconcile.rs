//! Benchmarks for the Msg → Update → Cmd loop of focus reconciliation
//!
//! Run with: cargo bench reconcile

use cellsync::config::NotebookConfig;
use cellsync::messages::{DocumentMsg, ModeMsg, Msg, SurfaceMsg};
use cellsync::model::{CellType, Document, NotebookModel, SurfaceId, ViewMode};
use cellsync::update::{self, update};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Model with `cells` cells, every cell plus the title mounted, editing cell 0
fn make_model(cells: usize) -> NotebookModel {
    let mut document = Document::new(ViewMode::Editor);
    for i in 0..cells {
        document.insert_cell(CellType::Javascript, format!("let x{} = {};", i, i));
    }
    let ids: Vec<_> = document.cells().iter().map(|c| c.id).collect();
    let mut model = NotebookModel::with_document(document, NotebookConfig::default());
    for id in &ids {
        let _ = update::mount(&mut model, SurfaceId::Cell(*id));
    }
    let _ = update::mount(&mut model, SurfaceId::Title);
    let _ = update(&mut model, Msg::Mode(ModeMsg::EnterEdit(ids[0])));
    model
}

#[divan::bench(args = [10, 100, 1000])]
fn select_next_cell_while_editing(bencher: divan::Bencher, cells: usize) {
    let mut model = make_model(cells);
    let ids: Vec<_> = model.document.cells().iter().map(|c| c.id).collect();
    let mut i = 0;

    bencher.bench_local(|| {
        i = (i + 1) % ids.len();
        let cmd = update(&mut model, Msg::Document(DocumentMsg::SelectCell(ids[i])));
        divan::black_box(cmd)
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn title_round_trip(bencher: divan::Bencher, cells: usize) {
    let mut model = make_model(cells);

    bencher.bench_local(|| {
        let enter = update(&mut model, Msg::Mode(ModeMsg::EnterTitleEdit));
        let leave = update(&mut model, Msg::Mode(ModeMsg::LeaveTitleEdit));
        divan::black_box((enter, leave))
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn content_change(bencher: divan::Bencher, cells: usize) {
    let mut model = make_model(cells);
    let id = model.document.cells()[cells / 2].id;

    bencher.bench_local(|| {
        let cmd = update(
            &mut model,
            Msg::Surface(SurfaceMsg::ContentChanged {
                id,
                content: "x = x + 1".to_string(),
            }),
        );
        divan::black_box(cmd)
    });
}
