//! Trailing-slash request interceptor generator.

use std::path::PathBuf;

use telar_core::GeneratedFile;

/// The cross-cutting request interceptor. Stateless: every outgoing request
/// gets its path normalized to end in a slash, query string preserved.
pub struct TrailingSlashInterceptor;

impl GeneratedFile for TrailingSlashInterceptor {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("core/interceptors/trailing-slash.interceptor.ts")
    }

    fn render(&self) -> String {
        r#"import { Injectable } from '@angular/core';
import {
  HttpEvent,
  HttpHandler,
  HttpInterceptor,
  HttpRequest
} from '@angular/common/http';
import { Observable } from 'rxjs';

@Injectable()
export class TrailingSlashInterceptor implements HttpInterceptor {
  intercept(req: HttpRequest<unknown>, next: HttpHandler): Observable<HttpEvent<unknown>> {
    const [baseUrl, query] = req.url.split('?');
    let url = baseUrl.endsWith('/') ? baseUrl : baseUrl + '/';
    if (query) {
      url += '?' + query;
    }
    return next.handle(req.clone({ url }));
  }
}
"#
        .to_string()
    }
}
