use calamine::{open_workbook, Data, Reader, Xlsx};
use car_info_manager::export::export_rows;
use car_info_manager::presenter::DisplayRow;
use car_info_manager::{Controller, MemoryCarRepository, NewCar, CarRepository};
use std::path::Path;

fn read_rows(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range("Cars").unwrap();
    range.rows().map(|row| row.to_vec()).collect()
}

fn header() -> Vec<Data> {
    ["ID", "Make", "Model", "Year", "Price"]
        .into_iter()
        .map(|title| Data::String(title.to_string()))
        .collect()
}

#[test]
fn single_row_export_matches_display() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cars.xlsx");
    let rows = vec![DisplayRow {
        id: 1,
        make: "Honda".into(),
        model: "City".into(),
        year: 2022,
        price: "1,200,000".into(),
    }];

    export_rows(&rows, &path).unwrap();

    let sheet = read_rows(&path);
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet[0], header());
    assert_eq!(
        sheet[1],
        vec![
            Data::Float(1.0),
            Data::String("Honda".into()),
            Data::String("City".into()),
            Data::Float(2022.0),
            Data::String("1,200,000".into()),
        ]
    );
}

#[test]
fn export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cars.xlsx");
    std::fs::write(&path, b"stale").unwrap();

    export_rows(&[], &path).unwrap();

    let sheet = read_rows(&path);
    assert_eq!(sheet, vec![header()]);
}

#[test]
fn export_reflects_current_search() {
    let mut repo = MemoryCarRepository::new();
    repo.insert(&NewCar::new("Nissan", "Kicks", 2020, 1_000_000.0)).unwrap();
    repo.insert(&NewCar::new("Renault", "Kwid", 2019, 400_000.0)).unwrap();
    let mut controller = Controller::new(repo).unwrap();
    controller.set_search_text("kwid");
    controller.search().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("filtered");
    let written = controller
        .export(&destination.display().to_string())
        .unwrap()
        .unwrap();
    assert_eq!(written, dir.path().join("filtered.xlsx"));

    let sheet = read_rows(&written);
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet[1][1], Data::String("Renault".into()));
    assert_eq!(sheet[1][4], Data::String("400,000".into()));
}
