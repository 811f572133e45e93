//! Generic UI component scaffolds.
//!
//! Entity-agnostic building blocks the generated pages lean on. Both are
//! create-once files: they exist to be restyled by hand.

use std::path::PathBuf;

use telar_core::{FileRules, GeneratedFile};

/// A generic card container.
pub struct CardComponent;

impl GeneratedFile for CardComponent {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("ui/card.component.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"import { Component, Input } from '@angular/core';
import { CommonModule } from '@angular/common';

@Component({
  selector: 'app-card',
  standalone: true,
  imports: [CommonModule],
  template: `
    <div class="card">
      <h3 *ngIf="title">{{ title }}</h3>
      <ng-content></ng-content>
    </div>
  `,
  styles: [`
    .card { padding: 1rem; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3); }
  `]
})
export class CardComponent {
  @Input() title = '';
}
"#
        .to_string()
    }
}

/// A generic data table with optional edit/delete actions.
pub struct TableComponent;

impl GeneratedFile for TableComponent {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("ui/table.component.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        r#"import { Component, EventEmitter, Input, Output } from '@angular/core';
import { CommonModule } from '@angular/common';

@Component({
  selector: 'app-table',
  standalone: true,
  imports: [CommonModule],
  template: `
    <table class="data-table">
      <thead>
        <tr>
          <th *ngFor="let key of columns(data[0])">{{ key }}</th>
          <th *ngIf="actions">Actions</th>
        </tr>
      </thead>
      <tbody>
        <tr *ngFor="let row of data">
          <td *ngFor="let key of columns(row)">{{ row[key] }}</td>
          <td *ngIf="actions">
            <button (click)="edit.emit(row)">Edit</button>
            <button (click)="delete.emit(row)">Delete</button>
          </td>
        </tr>
      </tbody>
    </table>
  `,
  styles: [`
    .data-table { width: 100%; border-collapse: collapse; }
    td, th { padding: 0.5rem; border-bottom: 1px solid #444; text-align: left; }
  `]
})
export class TableComponent {
  @Input() data: Record<string, unknown>[] = [];
  @Input() actions = false;
  @Input() excludeKeys: string[] = [];
  @Output() edit = new EventEmitter<unknown>();
  @Output() delete = new EventEmitter<unknown>();

  columns(row: Record<string, unknown> | undefined): string[] {
    if (!row) {
      return [];
    }
    return Object.keys(row).filter((key) => !this.excludeKeys.includes(key));
  }
}
"#
        .to_string()
    }
}
