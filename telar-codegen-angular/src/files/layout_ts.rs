//! Application layout generator.

use std::path::PathBuf;

use telar_core::GeneratedFile;
use telar_schema::Catalog;

use super::route_segment;

/// The top-level layout: topbar plus a sidebar listing every entity.
pub struct LayoutFile<'a> {
    catalog: &'a Catalog,
}

impl<'a> LayoutFile<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    fn sidebar_links(&self) -> String {
        self.catalog
            .entities()
            .map(|entity| {
                format!(
                    "          <li><a routerLink=\"/{}\">{}</a></li>\n",
                    route_segment(entity),
                    entity.class_name()
                )
            })
            .collect()
    }
}

impl GeneratedFile for LayoutFile<'_> {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("layouts/app-layout.component.ts")
    }

    fn render(&self) -> String {
        format!(
            r#"import {{ Component, signal }} from '@angular/core';
import {{ RouterModule }} from '@angular/router';
import {{ CommonModule }} from '@angular/common';

@Component({{
  selector: 'app-layout',
  standalone: true,
  imports: [CommonModule, RouterModule],
  template: `
    <header class="topbar">
      <button class="toggle-btn" (click)="sidebarOpen.set(!sidebarOpen())">
        {{{{ sidebarOpen() ? '«' : '»' }}}}
      </button>
      <div class="logo">App</div>
    </header>

    <div class="layout">
      <aside class="sidebar" [class.closed]="!sidebarOpen()">
        <h2>Menu</h2>
        <ul>
          <li><a routerLink="/">Home</a></li>
{links}        </ul>
      </aside>

      <main class="content">
        <router-outlet></router-outlet>
      </main>
    </div>
  `,
  styles: [`
    .topbar {{ display: flex; align-items: center; gap: 0.5rem; height: 50px; padding: 0 1rem; }}
    .layout {{ display: flex; height: calc(100% - 50px); }}
    .sidebar {{ flex: 0 0 220px; max-width: 220px; padding: 1rem; overflow: hidden; }}
    .sidebar.closed {{ flex-basis: 0; max-width: 0; padding: 1rem 0; }}
    .sidebar ul {{ list-style: none; padding: 0; margin: 0; }}
    .sidebar li {{ margin: 0.5rem 0; }}
    .content {{ flex: 1; padding: 1rem; overflow-y: auto; }}
  `]
}})
export class AppLayoutComponent {{
  sidebarOpen = signal(true);
}}
"#,
            links = self.sidebar_links(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_lists_every_entity() {
        let catalog: Catalog = r#"{
            "Book": {"properties": {"id": {"type": "integer"}}},
            "OrderItem": {"properties": {"id": {"type": "integer"}}}
        }"#
        .parse()
        .unwrap();

        let content = LayoutFile::new(&catalog).render();

        assert!(content.contains(r#"<li><a routerLink="/book">Book</a></li>"#));
        assert!(content.contains(r#"<li><a routerLink="/order-item">OrderItem</a></li>"#));
        assert!(content.contains(r#"<li><a routerLink="/">Home</a></li>"#));
    }
}
