//! Data-access service generator.

use std::path::PathBuf;

use telar_core::GeneratedFile;
use telar_schema::Entity;

/// The injectable CRUD service for one entity, calling the backend route
/// for that entity.
pub struct ServiceFile<'a> {
    entity: &'a Entity,
}

impl<'a> ServiceFile<'a> {
    pub fn new(entity: &'a Entity) -> Self {
        Self { entity }
    }
}

impl GeneratedFile for ServiceFile<'_> {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("data-access").join(format!("{}.service.ts", self.entity.class_name()))
    }

    fn render(&self) -> String {
        let class = self.entity.class_name();
        let route = self.entity.api_route();
        format!(
            r#"import {{ Injectable }} from '@angular/core';
import {{ HttpClient }} from '@angular/common/http';
import {{ Observable }} from 'rxjs';
import {{ {class} }} from '../models/{class}';
import {{ environment }} from '../../../../environments/environment';

@Injectable({{
  providedIn: 'root'
}})
export class {class}Service {{
  private baseUrl = `${{environment.apiBaseUrl}}/{route}`;

  constructor(private http: HttpClient) {{}}

  getAll(): Observable<{class}[]> {{
    return this.http.get<{class}[]>(this.baseUrl);
  }}

  get(id: number): Observable<{class}> {{
    return this.http.get<{class}>(`${{this.baseUrl}}/${{id}}`);
  }}

  create(data: {class}): Observable<{class}> {{
    return this.http.post<{class}>(this.baseUrl, data);
  }}

  update(id: number, data: {class}): Observable<{class}> {{
    return this.http.put<{class}>(`${{this.baseUrl}}/${{id}}`, data);
  }}

  delete(id: number): Observable<void> {{
    return this.http.delete<void>(`${{this.baseUrl}}/${{id}}`);
  }}
}}
"#,
            class = class,
            route = route,
        )
    }
}

#[cfg(test)]
mod tests {
    use telar_schema::Catalog;

    use super::*;

    #[test]
    fn test_service_targets_backend_route() {
        let catalog: Catalog =
            r#"{"Book": {"properties": {"id": {"type": "integer"}}}}"#.parse().unwrap();

        let content = ServiceFile::new(catalog.get("Book").unwrap()).render();

        assert!(content.contains("export class BookService {"));
        assert!(content.contains("`${environment.apiBaseUrl}/books`"));
        assert!(content.contains("getAll(): Observable<Book[]>"));
        assert!(content.contains("delete(id: number): Observable<void>"));
    }
}
