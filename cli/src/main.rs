use campuspath::app::CampusApp;
use campuspath::args::Args;
use campuspath::colors::ColorScheme;
use campuspath::display::{display_building_list, display_route_results, display_search_info};
use campuspath::search::{create_route_request, execute_route_search};
use clap::Parser;

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    let app = match CampusApp::new(&args) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("❌ Error: {error}");
            std::process::exit(1);
        }
    };

    if args.list_buildings {
        display_building_list(&app.campus, &colors);
        return;
    }

    let request = match create_route_request(args, &app.campus) {
        Ok(request) => request,
        Err(error_message) => {
            eprintln!("❌ Error: {error_message}");
            std::process::exit(1);
        }
    };

    if request.search_args.verbose {
        display_search_info(&request, &colors);
    }

    let report = execute_route_search(request, &app.campus);
    display_route_results(report, &app.campus, &colors);
}
