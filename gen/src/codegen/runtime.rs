//! Static runtime support file.
//!
//! Generated call sites delegate all transport work to one small Go package
//! emitted verbatim alongside them. It is not derived from the schema; the
//! source below is embedded in the generator binary and written as-is.
//!
//! The contract consumed by generated code:
//! - `Get(ctx, path, out)` / `Post(ctx, path, in, out)` — only these two
//!   verbs are wired
//! - `GetWithWrap` / `PostWithWrap` — wrap a raw JSON array response under a
//!   named field before decoding, for APIs that return bare arrays where the
//!   decode target is an object
//! - bearer-token authentication set once at construction
//! - non-2xx responses surface as `*APIError` carrying the status code and
//!   any parsed error body

use crate::config::ClientConfig;

/// Go source of the transport package, written verbatim.
const RUNTIME_SOURCE: &str = r#"// Code generated by trellis-gen. DO NOT EDIT.

// Package http provides the transport used by generated service wrappers.
//
// It handles JSON encoding of requests and responses, bearer token
// authentication, and consistent error reporting. Only GET and POST are
// supported; service wrappers never dispatch other verbs.
package http

import (
	"bytes"
	"context"
	"encoding/json"
	"fmt"
	"io"
	"net/http"
)

// Supported HTTP methods.
const (
	MethodGET  = "GET"
	MethodPOST = "POST"
)

// HTTPClient wraps the standard http.Client with JSON codec support.
//
// One instance is shared by every service wrapper of a generated client.
// The zero token means unauthenticated requests; to change the token,
// construct a new client.
type HTTPClient struct {
	// BaseURL is the API base URL, e.g. "https://api.example.com".
	BaseURL string

	// HTTPClient is the underlying client; configure timeout and
	// transport here.
	HTTPClient *http.Client

	// Token is the bearer token sent in the Authorization header.
	Token string
}

// APIError reports a non-2xx response.
type APIError struct {
	// StatusCode is the HTTP status of the failed response.
	StatusCode int

	// Body is the parsed JSON error body, if the response carried one.
	Body map[string]interface{}
}

func (e *APIError) Error() string {
	return fmt.Sprintf("HTTP %d: %v", e.StatusCode, e.Body)
}

// Get sends a GET request and decodes the JSON response into out.
func (c *HTTPClient) Get(ctx context.Context, path string, out interface{}) error {
	return c.do(ctx, MethodGET, path, nil, out, "")
}

// GetWithWrap sends a GET request and wraps the raw response under
// wrapField before decoding. Useful when the API returns a bare JSON
// array but out is an object with a single repeated field.
func (c *HTTPClient) GetWithWrap(ctx context.Context, path string, out interface{}, wrapField string) error {
	return c.do(ctx, MethodGET, path, nil, out, wrapField)
}

// Post sends a POST request with in encoded as a JSON body and decodes
// the JSON response into out.
func (c *HTTPClient) Post(ctx context.Context, path string, in interface{}, out interface{}) error {
	return c.do(ctx, MethodPOST, path, in, out, "")
}

// PostWithWrap sends a POST request and wraps the raw response under
// wrapField before decoding.
func (c *HTTPClient) PostWithWrap(ctx context.Context, path string, in interface{}, out interface{}, wrapField string) error {
	return c.do(ctx, MethodPOST, path, in, out, wrapField)
}

func (c *HTTPClient) do(ctx context.Context, method, path string, in interface{}, out interface{}, wrapField string) error {
	if method != MethodGET && method != MethodPOST {
		return fmt.Errorf("unsupported HTTP method: %s (only GET and POST are supported)", method)
	}

	url := c.BaseURL + path

	var body io.Reader
	if in != nil {
		encoded, err := json.Marshal(in)
		if err != nil {
			return fmt.Errorf("encode request: %w", err)
		}
		body = bytes.NewReader(encoded)
	}

	req, err := http.NewRequestWithContext(ctx, method, url, body)
	if err != nil {
		return fmt.Errorf("create request: %w", err)
	}

	req.Header.Set("Accept", "application/json")
	if in != nil {
		req.Header.Set("Content-Type", "application/json")
	}
	if c.Token != "" {
		req.Header.Set("Authorization", "Bearer "+c.Token)
	}

	resp, err := c.HTTPClient.Do(req)
	if err != nil {
		return fmt.Errorf("send request: %w", err)
	}
	defer resp.Body.Close()

	data, err := io.ReadAll(resp.Body)
	if err != nil {
		return fmt.Errorf("read response: %w", err)
	}

	if resp.StatusCode < 200 || resp.StatusCode >= 300 {
		apiErr := &APIError{StatusCode: resp.StatusCode}
		json.Unmarshal(data, &apiErr.Body)
		return apiErr
	}

	if out != nil {
		if wrapField != "" {
			wrapped, err := json.Marshal(map[string]json.RawMessage{wrapField: json.RawMessage(data)})
			if err != nil {
				return fmt.Errorf("wrap response: %w", err)
			}
			data = wrapped
		}
		if err := json.Unmarshal(data, out); err != nil {
			return fmt.Errorf("decode response: %w (body: %s)", err, data)
		}
	}

	return nil
}
"#;

/// Returns the runtime support source, written verbatim.
pub fn runtime_source() -> &'static str {
    RUNTIME_SOURCE
}

/// Output path of the runtime file: `<subdir>/http/client.gen.go`.
pub fn runtime_file_path(cfg: &ClientConfig) -> String {
    format!("{}/http/client.gen.go", cfg.output_subdir)
}
