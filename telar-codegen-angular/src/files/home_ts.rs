//! Home page generator.

use std::path::PathBuf;

use telar_core::GeneratedFile;
use telar_schema::Catalog;

use super::route_segment;

/// The home/navigation page: one button per entity, catalog order.
pub struct HomePageFile<'a> {
    catalog: &'a Catalog,
}

impl<'a> HomePageFile<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    fn buttons(&self) -> String {
        self.catalog
            .entities()
            .map(|entity| {
                format!(
                    "      <button (click)=\"goTo{}List()\">{} List</button>\n",
                    entity.class_name(),
                    entity.class_name()
                )
            })
            .collect()
    }

    fn navigators(&self) -> String {
        self.catalog
            .entities()
            .map(|entity| {
                format!(
                    "\n  goTo{}List() {{\n    this.router.navigate(['{}']);\n  }}\n",
                    entity.class_name(),
                    route_segment(entity)
                )
            })
            .collect()
    }
}

impl GeneratedFile for HomePageFile<'_> {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("features/home/pages/home.page.ts")
    }

    fn render(&self) -> String {
        format!(
            r#"import {{ Component }} from '@angular/core';
import {{ Router }} from '@angular/router';
import {{ CommonModule }} from '@angular/common';

@Component({{
  selector: 'app-home',
  standalone: true,
  imports: [CommonModule],
  template: `
    <h1>Welcome</h1>
    <div class="buttons-container">
{buttons}    </div>
  `,
  styles: [`
    .buttons-container {{ display: flex; flex-direction: column; gap: 10px; max-width: 300px; }}
    button {{ padding: 10px; font-size: 16px; }}
  `]
}})
export class HomePage {{
  constructor(private router: Router) {{}}
{navigators}}}
"#,
            buttons = self.buttons(),
            navigators = self.navigators(),
        )
    }
}
