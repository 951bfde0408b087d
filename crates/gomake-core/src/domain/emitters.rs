//! Bodies of the architecture-independent project files.
//!
//! Every function here is pure: same context in, same text out. Writing the
//! result is the job of the auxiliary file service.

use crate::domain::{render_context::RenderContext, value_objects::License};

pub const GO_MOD: &str = "go.mod";
pub const README: &str = "README.md";
pub const GITIGNORE: &str = ".gitignore";
pub const MAKEFILE: &str = "Makefile";
pub const DOCKERFILE: &str = "Dockerfile";
pub const DOCKER_COMPOSE: &str = "docker-compose.yml";
pub const DOCKERIGNORE: &str = ".dockerignore";
pub const LICENSE_FILE: &str = "LICENSE";

/// Go toolchain version written to go.mod and the Docker builder image.
pub const GO_VERSION: &str = "1.21";

// ── Module / README / gitignore ───────────────────────────────────────────────

pub fn go_mod(ctx: &RenderContext) -> String {
    format!(
        "module {module}

go {GO_VERSION}

require (
\tgithub.com/gorilla/mux v1.8.0
\tgithub.com/lib/pq v1.10.9
)",
        module = ctx.module_name()
    )
}

pub fn readme(ctx: &RenderContext) -> String {
    format!(
        r#"# {name}

A Go application built with {arch} architecture.

## Getting Started

### Prerequisites
- Go {GO_VERSION} or higher
- PostgreSQL (optional)

### Installation

1. Clone the repository
2. Install dependencies:
```bash
go mod tidy
```

3. Run the application:
```bash
make run
```

## Architecture

This project follows the {arch} architecture pattern.

## API Endpoints

- `GET /health` - Health check
- `GET /api/v1/users` - Get all users
- `POST /api/v1/users` - Create a new user

## Development

### Running Tests
```bash
make test
```

### Building
```bash
make build
```

### Docker
```bash
make docker-build
make docker-run
```

## License

This project is licensed under the {license} License."#,
        name = ctx.project_name(),
        arch = ctx.architecture(),
        license = ctx.license(),
    )
}

pub fn gitignore() -> &'static str {
    "# Binaries for programs and plugins
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary, built with go test -c
*.test

# Output of the go coverage tool
*.out
*.cover

# Dependency directories
vendor/

# Go workspace file
go.work
go.work.sum

# Build artifacts
/bin/
/dist/
/build/

# Environment variables
.env
.env.local
.env.*.local

# IDE files
.vscode/
.idea/
*.swp
*.swo

# OS generated files
.DS_Store
Thumbs.db

# Logs
*.log
logs/

# Database
*.db
*.sqlite
*.sqlite3

# Temporary files
tmp/
temp/"
}

// ── Makefile ──────────────────────────────────────────────────────────────────

/// Always emitted; `with_makefile` does not gate it.
pub fn makefile(ctx: &RenderContext) -> String {
    format!(
        r#"# {name} Makefile

.PHONY: help build run test clean lint fmt install

APP_NAME={name}
VERSION?=$(shell git describe --tags --always --dirty 2>/dev/null || echo "dev")

help: ## Show this help message
	@echo 'Usage: make [target]'
	@echo ''
	@echo 'Targets:'
	@awk 'BEGIN {{FS = ":.*?## "}} /^[a-zA-Z_-]+:.*?## / {{printf "  \033[36m%-15s\033[0m %s\n", $$1, $$2}}' $(MAKEFILE_LIST)

build: ## Build the application
	@echo "Building $(APP_NAME)..."
	@go build -o bin/$(APP_NAME) cmd/$(APP_NAME)/main.go
	@echo "Build complete: bin/$(APP_NAME)"

run: ## Run the application
	@go run cmd/$(APP_NAME)/main.go

test: ## Run tests
	@go test -v ./...

test-coverage: ## Run tests with coverage
	@go test -v -coverprofile=coverage.out ./...
	@go tool cover -html=coverage.out -o coverage.html

clean: ## Clean build artifacts
	@rm -rf bin/
	@rm -f coverage.out coverage.html

lint: ## Run linter
	@golangci-lint run

fmt: ## Format code
	@go fmt ./...
	@goimports -w .

mod-tidy: ## Tidy go modules
	@go mod tidy

deps: ## Download dependencies
	@go mod download

docker-build: ## Build Docker image
	@docker build -t $(APP_NAME):$(VERSION) .

docker-run: ## Run Docker container
	@docker run -p 8080:8080 $(APP_NAME):$(VERSION)

dev: ## Run in development mode with hot reload
	@air

install-tools: ## Install development tools
	@go install github.com/golangci/golangci-lint/cmd/golangci-lint@latest
	@go install golang.org/x/tools/cmd/goimports@latest
	@go install github.com/cosmtrek/air@latest

setup: install-tools deps ## Setup development environment
	@echo "Development environment setup complete"

all: fmt lint test build ## Run all checks and build

.DEFAULT_GOAL := help
"#,
        name = ctx.project_name()
    )
}

// ── Docker ────────────────────────────────────────────────────────────────────

pub fn dockerfile(ctx: &RenderContext) -> String {
    format!(
        r#"# Build stage
FROM golang:{GO_VERSION}-alpine AS builder

WORKDIR /app

# Install dependencies
RUN apk add --no-cache git

# Copy go mod files
COPY go.mod go.sum ./
RUN go mod download

# Copy source code
COPY . .

# Build the application
RUN CGO_ENABLED=0 GOOS=linux go build -a -installsuffix cgo -o main {entry}/main.go

# Final stage
FROM alpine:latest

RUN apk --no-cache add ca-certificates
WORKDIR /root/

# Copy the binary from builder stage
COPY --from=builder /app/main .

# Expose port
EXPOSE 8080

# Health check
HEALTHCHECK --interval=30s --timeout=3s --start-period=5s --retries=3 \
  CMD wget --no-verbose --tries=1 --spider http://localhost:8080/health || exit 1

# Run the binary
CMD ["./main"]
"#,
        entry = ctx.main_package_path()
    )
}

pub fn docker_compose(ctx: &RenderContext) -> String {
    format!(
        r#"version: '3.8'

services:
  app:
    build: .
    ports:
      - "8080:8080"
    environment:
      - APP_ENV=development
      - DB_HOST=postgres
      - DB_PORT=5432
      - DB_USER=postgres
      - DB_PASSWORD=password
      - DB_NAME={db}
      - REDIS_HOST=redis
      - REDIS_PORT=6379
    depends_on:
      - postgres
      - redis
    restart: unless-stopped

  postgres:
    image: postgres:15-alpine
    environment:
      - POSTGRES_USER=postgres
      - POSTGRES_PASSWORD=password
      - POSTGRES_DB={db}
    ports:
      - "5432:5432"
    volumes:
      - postgres_data:/var/lib/postgresql/data
    restart: unless-stopped

  redis:
    image: redis:7-alpine
    ports:
      - "6379:6379"
    volumes:
      - redis_data:/data
    restart: unless-stopped

volumes:
  postgres_data:
  redis_data:
"#,
        db = database_name(ctx.project_name())
    )
}

pub fn dockerignore() -> &'static str {
    "# Git
.git
.gitignore

# Documentation
README.md
CHANGELOG.md
LICENSE

# Development files
.env
.env.local
.env.*.local

# IDE files
.vscode/
.idea/
*.swp
*.swo

# OS files
.DS_Store
Thumbs.db

# Build artifacts
bin/
dist/
build/

# Test files
coverage.out
coverage.html

# Temporary files
tmp/
temp/

# Node modules (if any)
node_modules/

# Logs
*.log
logs/
"
}

/// Database name used by the compose file: `<project>_db`.
pub fn database_name(project_name: &str) -> String {
    format!("{project_name}_db")
}

// ── License ───────────────────────────────────────────────────────────────────

/// LICENSE body with `holder` as copyright holder.
pub fn license(license: License, year: i32, holder: &str) -> String {
    match license {
        License::Mit => format!(
            r#"MIT License

Copyright (c) {year} {holder}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#
        ),
        License::Apache => format!(
            r#"Apache License
Version 2.0, January 2004
http://www.apache.org/licenses/

Copyright {year} {holder}

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"#
        ),
        License::Bsd => format!(
            r#"BSD 3-Clause License

Copyright (c) {year}, {holder}
All rights reserved.

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are met:

1. Redistributions of source code must retain the above copyright notice, this
   list of conditions and the following disclaimer.

2. Redistributions in binary form must reproduce the above copyright notice,
   this list of conditions and the following disclaimer in the documentation
   and/or other materials provided with the distribution.

3. Neither the name of the copyright holder nor the names of its
   contributors may be used to endorse or promote products derived from
   this software without specific prior written permission.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
"#
        ),
        License::Gpl => format!(
            r#"GNU GENERAL PUBLIC LICENSE
Version 3, 29 June 2007

Copyright (C) {year} {holder}

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
"#
        ),
    }
}
