use anyhow::Result;

use crate::paths::Layout;
use crate::state::SessionState;
use crate::ui::menu::{self, MainAction};

// ---------------------------------------------------------------------------
// Application loop
// ---------------------------------------------------------------------------

pub struct FairlensApp {
    pub state: SessionState,
    pub layout: Layout,
}

impl FairlensApp {
    pub fn new(layout: Layout) -> Self {
        FairlensApp {
            state: SessionState::default(),
            layout,
        }
    }

    /// Run the menu loop until the user exits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match menu::main_menu()? {
                MainAction::LoadDataset => menu::load_dataset(&mut self.state, &self.layout)?,
                MainAction::UploadImage => menu::upload_image(&self.layout)?,
                MainAction::SelectMetric => menu::select_metric(&mut self.state)?,
                MainAction::RunEvaluation => menu::run_evaluation(&mut self.state)?,
                MainAction::Visualise => menu::visualise(&self.state)?,
                MainAction::ExportReport => menu::export_report(&self.state, &self.layout)?,
                MainAction::About => menu::about()?,
                MainAction::Exit => {
                    println!("Exiting. Goodbye!");
                    return Ok(());
                }
            }
        }
    }
}
