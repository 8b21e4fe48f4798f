use crate::config::Config;
use crate::errors::AppResult;
use crate::models::city::City;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let data_dir = cfg.data_path();
    let mut table = Table::new(["city", "file", "status"]);

    for city in City::ALL {
        let status = if city.data_path(&data_dir).is_file() {
            "found"
        } else {
            "missing"
        };
        table.add_row(vec![
            city.name().to_string(),
            city.file_name().to_string(),
            status.to_string(),
        ]);
    }

    println!("Data directory: {}\n", data_dir.display());
    print!("{}", table.render());
    Ok(())
}
