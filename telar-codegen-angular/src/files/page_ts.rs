//! CRUD page component generators.
//!
//! Pages are create-once scaffolds: the generator lays down a working
//! starting point and never clobbers later hand edits.

use std::path::PathBuf;

use telar_core::{FileRules, GeneratedFile, to_camel_case};
use telar_schema::Entity;

use super::route_segment;

/// The three page kinds generated per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    List,
    Create,
    Edit,
}

impl PageMode {
    pub const ALL: [PageMode; 3] = [PageMode::List, PageMode::Create, PageMode::Edit];

    /// File-name segment ("list", "create", "edit").
    pub fn as_str(&self) -> &'static str {
        match self {
            PageMode::List => "list",
            PageMode::Create => "create",
            PageMode::Edit => "edit",
        }
    }

    /// Class-name segment ("List", "Create", "Edit").
    fn class_segment(&self) -> &'static str {
        match self {
            PageMode::List => "List",
            PageMode::Create => "Create",
            PageMode::Edit => "Edit",
        }
    }
}

/// One CRUD page component for an entity, rendered from the template for
/// its mode.
pub struct PageFile<'a> {
    entity: &'a Entity,
    mode: PageMode,
}

impl<'a> PageFile<'a> {
    pub fn new(entity: &'a Entity, mode: PageMode) -> Self {
        Self { entity, mode }
    }

    /// Form input blocks for every non-id property, external names
    /// throughout; labels use the display spelling.
    fn form_fields(&self) -> String {
        self.entity
            .properties
            .iter()
            .filter(|p| !p.is_id())
            .map(|p| {
                format!(
                    r#"        <div class="form-group">
          <label for="{name}">{label}</label>
          <input id="{name}" type="text" formControlName="{name}">
        </div>
"#,
                    name = p.name,
                    label = to_camel_case(&p.name),
                )
            })
            .collect()
    }

    /// Form control declarations for every non-id property.
    fn form_controls(&self) -> String {
        self.entity
            .properties
            .iter()
            .filter(|p| !p.is_id())
            .map(|p| format!("      {}: [''],\n", p.name))
            .collect()
    }

    fn render_list(&self) -> String {
        let class = self.entity.class_name();
        let route = route_segment(self.entity);
        format!(
            r#"import {{ Component, OnInit }} from '@angular/core';
import {{ CommonModule }} from '@angular/common';
import {{ Router }} from '@angular/router';
import {{ {class}Service }} from '../../data-access/{class}.service';
import {{ {class} }} from '../../models/{class}';
import {{ TableComponent }} from '../../ui/table.component';

@Component({{
  selector: 'app-{route}-list',
  standalone: true,
  imports: [CommonModule, TableComponent],
  template: `
    <div class="list-container">
      <button class="create-btn" (click)="goToCreate()">New {class}</button>
      <app-table [data]="items" [actions]="true" [excludeKeys]="['id']"
                 (edit)="goToEdit($event)" (delete)="remove($event)">
      </app-table>
    </div>
  `,
  styles: [`
    .list-container {{ max-width: 900px; margin: 2rem auto; padding: 1rem; }}
    .create-btn {{ margin-bottom: 1rem; padding: 0.5rem 1rem; cursor: pointer; }}
  `]
}})
export class {class}ListPage implements OnInit {{
  items: {class}[] = [];

  constructor(private service: {class}Service, private router: Router) {{}}

  ngOnInit() {{
    this.loadItems();
  }}

  loadItems() {{
    this.service.getAll().subscribe((data: {class}[]) => {{
      this.items = data;
    }});
  }}

  goToCreate() {{
    this.router.navigate(['{route}/create']);
  }}

  goToEdit(item: {class}) {{
    this.router.navigate(['{route}/edit', item.id]);
  }}

  remove(item: {class}) {{
    this.service.delete(item.id).subscribe(() => this.loadItems());
  }}
}}
"#,
            class = class,
            route = route,
        )
    }

    fn render_create(&self) -> String {
        let class = self.entity.class_name();
        let route = route_segment(self.entity);
        format!(
            r#"import {{ Component }} from '@angular/core';
import {{ CommonModule }} from '@angular/common';
import {{ FormBuilder, FormGroup, ReactiveFormsModule }} from '@angular/forms';
import {{ Router }} from '@angular/router';
import {{ {class}Service }} from '../../data-access/{class}.service';

@Component({{
  selector: 'app-{route}-create',
  standalone: true,
  imports: [CommonModule, ReactiveFormsModule],
  template: `
    <div class="form-container">
      <h2>New {class}</h2>
      <form [formGroup]="form" (ngSubmit)="submit()">
{fields}        <div class="button-group">
          <button type="submit" [disabled]="form.invalid">Save</button>
          <button type="button" class="cancel-btn" (click)="cancel()">Cancel</button>
        </div>
      </form>
    </div>
  `,
  styles: [`
    .form-container {{ max-width: 400px; margin: 2rem auto; padding: 1.5rem; }}
    .form-group {{ display: flex; flex-direction: column; margin-bottom: 1rem; }}
    .button-group {{ display: flex; gap: 0.5rem; margin-top: 1rem; }}
  `]
}})
export class {class}CreatePage {{
  form: FormGroup;

  constructor(
    private fb: FormBuilder,
    private service: {class}Service,
    private router: Router
  ) {{
    this.form = this.fb.group({{
{controls}    }});
  }}

  submit() {{
    if (this.form.valid) {{
      this.service.create(this.form.value)
        .subscribe(() => this.router.navigate(['{route}']));
    }}
  }}

  cancel() {{
    this.router.navigate(['{route}']);
  }}
}}
"#,
            class = class,
            route = route,
            fields = self.form_fields(),
            controls = self.form_controls(),
        )
    }

    fn render_edit(&self) -> String {
        let class = self.entity.class_name();
        let route = route_segment(self.entity);
        format!(
            r#"import {{ Component, OnInit }} from '@angular/core';
import {{ CommonModule }} from '@angular/common';
import {{ FormBuilder, FormGroup, ReactiveFormsModule }} from '@angular/forms';
import {{ ActivatedRoute, Router }} from '@angular/router';
import {{ {class}Service }} from '../../data-access/{class}.service';

@Component({{
  selector: 'app-{route}-edit',
  standalone: true,
  imports: [CommonModule, ReactiveFormsModule],
  template: `
    <div class="form-container">
      <h2>Edit {class}</h2>
      <form [formGroup]="form" (ngSubmit)="submit()">
{fields}        <div class="button-group">
          <button type="submit" [disabled]="form.invalid">Save</button>
          <button type="button" class="cancel-btn" (click)="cancel()">Cancel</button>
        </div>
      </form>
    </div>
  `,
  styles: [`
    .form-container {{ max-width: 400px; margin: 2rem auto; padding: 1.5rem; }}
    .form-group {{ display: flex; flex-direction: column; margin-bottom: 1rem; }}
    .button-group {{ display: flex; gap: 0.5rem; margin-top: 1rem; }}
  `]
}})
export class {class}EditPage implements OnInit {{
  form: FormGroup;
  private id!: number;

  constructor(
    private fb: FormBuilder,
    private service: {class}Service,
    private activatedRoute: ActivatedRoute,
    private router: Router
  ) {{
    this.form = this.fb.group({{
{controls}    }});
  }}

  ngOnInit() {{
    this.id = Number(this.activatedRoute.snapshot.paramMap.get('id'));
    this.service.get(this.id).subscribe((data) => this.form.patchValue(data));
  }}

  submit() {{
    if (this.form.valid) {{
      this.service.update(this.id, {{ ...this.form.value, id: this.id }})
        .subscribe(() => this.router.navigate(['{route}']));
    }}
  }}

  cancel() {{
    this.router.navigate(['{route}']);
  }}
}}
"#,
            class = class,
            route = route,
            fields = self.form_fields(),
            controls = self.form_controls(),
        )
    }
}

impl GeneratedFile for PageFile<'_> {
    fn rel_path(&self) -> PathBuf {
        let class = self.entity.class_name();
        PathBuf::from("pages")
            .join(&class)
            .join(format!("{}.{}.page.ts", class, self.mode.as_str()))
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        match self.mode {
            PageMode::List => self.render_list(),
            PageMode::Create => self.render_create(),
            PageMode::Edit => self.render_edit(),
        }
    }
}

/// Class name of the page component for an entity and mode.
pub(crate) fn page_class(entity: &Entity, mode: PageMode) -> String {
    format!("{}{}Page", entity.class_name(), mode.class_segment())
}
