use chrono::{NaiveDate, Utc};
use sunclock::{
    day_length, format_dms, solar_noon, to_local, GeoCoordinate, JulianDate, SolarEvent,
};

fn main() {
    env_logger::init();

    let flint_hill = match GeoCoordinate::new(-90.85866, 38.85563244) {
        Ok(coord) => coord,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap_or_else(|| Utc::now().date_naive());
    let day = JulianDate::from_date(date);

    let ((lat, lat_h), (lon, lon_h)) = flint_hill.to_dms();
    println!("Flint Hill, MO  {}  {}", format_dms(&lat, lat_h), format_dms(&lon, lon_h));
    println!("{date}  {day}");

    for event in SolarEvent::ALL {
        let event_name = format!("{event:?}");
        match event.time(day, flint_hill) {
            Ok(utc) => match to_local(utc, -6) {
                Ok(local) => println!("{event_name:<28} {utc}  {}", local.format("%H:%M:%S %:z")),
                Err(err) => println!("{event_name:<28} {err}"),
            },
            Err(err) => println!("{event_name:<28} {err}"),
        }
    }

    if let Ok(noon) = solar_noon(day, flint_hill) {
        println!("Solar noon                   {noon}");
    }
    if let Ok(length) = day_length(day, flint_hill) {
        println!(
            "Day length                   {}h {:02}m",
            length.num_hours(),
            length.num_minutes() % 60
        );
    }
}
